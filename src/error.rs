//! Error types for the diffset library.
//!
//! This module provides comprehensive error handling using the `thiserror` crate,
//! with specific error variants for Galois field construction, parameter
//! feasibility, missing constructions, and verification.
//!
//! The feasibility and coverage failures are deliberately distinct:
//! [`Error::InfeasibleParameters`] means the counting relation rules the family
//! out categorically, while [`Error::UnsupportedParameters`] means no known
//! construction covers the parameters. The two must never be conflated: the
//! first is a disproof, the second is ignorance.

use thiserror::Error;

/// The main error type for the diffset library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Galois Field Errors ============
    /// The specified order is not a prime power.
    #[error("order {0} is not a prime power (must be p^k for prime p and k >= 1)")]
    NotPrimePower(u32),

    /// No irreducible polynomial is known for the specified field order.
    #[error("no irreducible polynomial available for GF({0})")]
    NoIrreduciblePolynomial(u32),

    // ============ Group Errors ============
    /// The group declares neither an additive nor a multiplicative law.
    #[error("cannot classify group of cardinality {cardinality} as additive or multiplicative")]
    UnclassifiableGroup {
        /// Cardinality of the offending group.
        cardinality: u32,
    },

    // ============ Parameter Errors ============
    /// The counting relation b·k·(k-1) = λ·(v-1) cannot hold for any family
    /// with these parameters, so no (v,k,λ)-difference family exists.
    #[error(
        "a ({v},{k},{lambda})-difference family may exist only if \
         {lambda}*(v-1) is divisible by k*(k-1)"
    )]
    InfeasibleParameters {
        /// Group order.
        v: u32,
        /// Block size.
        k: usize,
        /// Difference multiplicity.
        lambda: u32,
    },

    /// No known construction covers these parameters. This is not a proof of
    /// non-existence.
    #[error("no known construction for a ({v},{k},{lambda})-difference family")]
    UnsupportedParameters {
        /// Group order.
        v: u32,
        /// Block size.
        k: usize,
        /// Difference multiplicity.
        lambda: u32,
    },

    // ============ Verification Errors ============
    /// A family produced by a construction algorithm failed verification.
    /// This indicates a defect in the construction logic itself.
    #[error(
        "constructed ({v},{k},{lambda})-difference family failed verification; \
         this is an internal consistency error"
    )]
    VerificationFailed {
        /// Group order.
        v: u32,
        /// Block size.
        k: usize,
        /// Difference multiplicity.
        lambda: u32,
    },
}

/// A specialized `Result` type for diffset operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NotPrimePower(6);
        assert!(err.to_string().contains("6"));
        assert!(err.to_string().contains("prime power"));

        let err = Error::InfeasibleParameters {
            v: 8,
            k: 3,
            lambda: 1,
        };
        assert!(err.to_string().contains("(8,3,1)"));
        assert!(err.to_string().contains("divisible"));

        let err = Error::UnsupportedParameters {
            v: 61,
            k: 6,
            lambda: 1,
        };
        assert!(err.to_string().contains("no known construction"));
    }

    #[test]
    fn test_infeasible_and_unsupported_are_distinct() {
        let infeasible = Error::InfeasibleParameters {
            v: 8,
            k: 3,
            lambda: 1,
        };
        let unsupported = Error::UnsupportedParameters {
            v: 8,
            k: 3,
            lambda: 1,
        };
        assert_ne!(infeasible, unsupported);
    }

    #[test]
    fn test_error_equality() {
        let err1 = Error::NotPrimePower(6);
        let err2 = Error::NotPrimePower(6);
        let err3 = Error::NotPrimePower(10);

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
