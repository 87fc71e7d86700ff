//! Access flags attached to classes, fields and methods.
//!
//! The flags mirror the subset of JVM/Dalvik access flags that the rename
//! heuristics consume. They are supplied by the decompiler's symbol graph and
//! are never modified by this crate.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Access and modifier flags of a class, field or method
    pub struct AccessFlags: u32 {
        /// Accessible from everywhere
        const PUBLIC = 0x0001;
        /// Accessible only from the declaring class
        const PRIVATE = 0x0002;
        /// Accessible from sub-classes and the package
        const PROTECTED = 0x0004;
        /// Member belongs to the class, not to an instance
        const STATIC = 0x0008;
        /// Member cannot be overridden or reassigned
        const FINAL = 0x0010;
        /// Member was generated by the compiler
        const SYNTHETIC = 0x1000;
        /// Class is an interface
        const INTERFACE = 0x0200;
        /// Class or method has no implementation
        const ABSTRACT = 0x0400;
        /// Class is an enum
        const ENUM = 0x4000;
    }
}

impl AccessFlags {
    /// Returns `true` if the `PUBLIC` flag is set.
    #[must_use]
    pub fn is_public(self) -> bool {
        self.contains(Self::PUBLIC)
    }

    /// Returns `true` if the `PRIVATE` flag is set.
    #[must_use]
    pub fn is_private(self) -> bool {
        self.contains(Self::PRIVATE)
    }

    /// Returns `true` if the `STATIC` flag is set.
    #[must_use]
    pub fn is_static(self) -> bool {
        self.contains(Self::STATIC)
    }

    /// Returns `true` if the `SYNTHETIC` flag is set.
    #[must_use]
    pub fn is_synthetic(self) -> bool {
        self.contains(Self::SYNTHETIC)
    }

    /// Returns `true` if the `INTERFACE` flag is set.
    #[must_use]
    pub fn is_interface(self) -> bool {
        self.contains(Self::INTERFACE)
    }

    /// Returns `true` if the `ABSTRACT` flag is set.
    #[must_use]
    pub fn is_abstract(self) -> bool {
        self.contains(Self::ABSTRACT)
    }

    /// Returns `true` if the `ENUM` flag is set.
    #[must_use]
    pub fn is_enum(self) -> bool {
        self.contains(Self::ENUM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_queries() {
        let flags = AccessFlags::PRIVATE | AccessFlags::STATIC;
        assert!(flags.is_private());
        assert!(flags.is_static());
        assert!(!flags.is_public());
        assert!(!flags.is_synthetic());
    }

    #[test]
    fn test_interface_is_not_enum() {
        let flags = AccessFlags::PUBLIC | AccessFlags::INTERFACE | AccessFlags::ABSTRACT;
        assert!(flags.is_interface());
        assert!(flags.is_abstract());
        assert!(!flags.is_enum());
    }
}
