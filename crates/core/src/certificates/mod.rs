//! Certificates module - category records, the net worth aggregate, totals
//! and persistence contracts.

pub mod category;
pub mod certificates_model;
pub mod certificates_service;
pub mod certificates_traits;
pub mod records;
pub mod summary;
pub mod validation;

#[cfg(test)]
mod certificates_service_tests;
#[cfg(test)]
mod summary_tests;

pub use category::{Category, CategoryClass};
pub use certificates_model::{
    display_name, CategoryNotes, CertificateDetail, CertificateMetadata, CertificateSummary,
    GeneratedCertificate, Individual, NetWorthData, NewCertificate, Partner, PreparerDetails,
};
pub use certificates_service::CertificateService;
pub use certificates_traits::{CertificateRepositoryTrait, CertificateServiceTrait};
pub use records::{
    BankAccount, CategoryRecord, Deposit, GoldHolding, InsurancePolicy, Liability, MutualFund,
    NpsAccount, PartnershipFirm, PfAccount, PostOfficeScheme, Property, ShareLot, Vehicle,
};
pub use summary::{CategoryTotal, NetWorthSummary};
pub use validation::validate_for_generation;
