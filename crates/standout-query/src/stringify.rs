//! Turning elements into text for string conversions.
//!
//! Integers are written in decimal and floats in their shortest round-trip
//! form. Characters and string slices are appended as they are.

/// A value that can be appended to a string-like container.
pub trait Stringify {
    fn stringify_into(&self, out: &mut String);

    fn stringify(&self) -> String {
        let mut out = String::new();
        self.stringify_into(&mut out);
        out
    }
}

macro_rules! stringify_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Stringify for $ty {
                fn stringify_into(&self, out: &mut String) {
                    let mut buffer = itoa::Buffer::new();
                    out.push_str(buffer.format(*self));
                }
            }
        )*
    };
}

stringify_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! stringify_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Stringify for $ty {
                fn stringify_into(&self, out: &mut String) {
                    let mut buffer = ryu::Buffer::new();
                    out.push_str(buffer.format(*self));
                }
            }
        )*
    };
}

stringify_float!(f32, f64);

impl Stringify for char {
    fn stringify_into(&self, out: &mut String) {
        out.push(*self);
    }
}

impl Stringify for str {
    fn stringify_into(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Stringify for String {
    fn stringify_into(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl<T: Stringify + ?Sized> Stringify for &T {
    fn stringify_into(&self, out: &mut String) {
        (**self).stringify_into(out);
    }
}
