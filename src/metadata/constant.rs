//! Literal constants attached to fields and parameters (`Constant` table, §II.22.9).

/// A literal default value as stored in the `Constant` table
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    /// A null reference (`ELEMENT_TYPE_CLASS` with a zero value)
    Null,
    /// bool
    Boolean(bool),
    /// UTF-16 code unit
    Char(u16),
    /// signed 8bit integer
    I1(i8),
    /// unsigned 8bit integer
    U1(u8),
    /// signed 16bit integer
    I2(i16),
    /// unsigned 16bit integer
    U2(u16),
    /// signed 32bit integer
    I4(i32),
    /// unsigned 32bit integer
    U4(u32),
    /// signed 64bit integer
    I8(i64),
    /// unsigned 64bit integer
    U8(u64),
    /// 32bit floating-point
    R4(f32),
    /// 64bit floating-point
    R8(f64),
    /// System.String
    String(String),
}
