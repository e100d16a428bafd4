// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// A trait for number types that have a wider type of the same kind.
///
/// # Examples
///
/// ```rust
/// # use typeval_core::num::ops::widen::Widen;
/// let a: i8 = 100;
/// let wide: i16 = a.widen();
/// assert_eq!(wide * 2, 200);
/// ```
pub trait Widen: Sized {
    /// The wider type.
    type Wide;

    /// Converts the value into the wider type without loss.
    fn widen(self) -> Self::Wide;
}

macro_rules! widen_impl {
    ($($t:ty => $wide:ty),* $(,)?) => {
        $(
            impl Widen for $t {
                type Wide = $wide;

                #[inline(always)]
                fn widen(self) -> $wide {
                    <$wide>::from(self)
                }
            }
        )*
    };
}

widen_impl!(
    i8 => i16,
    i16 => i32,
    i32 => i64,
    i64 => i128,
    u8 => u16,
    u16 => u32,
    u32 => u64,
    u64 => u128,
    f32 => f64,
);

impl Widen for isize {
    type Wide = i128;

    #[inline(always)]
    fn widen(self) -> i128 {
        self as i128
    }
}

impl Widen for usize {
    type Wide = u128;

    #[inline(always)]
    fn widen(self) -> u128 {
        self as u128
    }
}

#[cfg(test)]
mod tests {
    use super::Widen;

    #[test]
    fn test_widen_preserves_value() {
        assert_eq!(i64::MAX.widen(), i128::from(i64::MAX));
        assert_eq!(u8::MAX.widen(), 255_u16);
        assert_eq!(usize::MAX.widen(), usize::MAX as u128);
        assert_eq!(0.1_f32.widen(), f64::from(0.1_f32));
    }

    #[test]
    fn test_widen_leaves_room_for_overflow() {
        let a: i32 = i32::MAX;
        assert_eq!(a.widen() + 1, i64::from(i32::MAX) + 1);
    }
}
