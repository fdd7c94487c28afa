//! Schema Registry
//!
//! Per-contract-type required-field lists and field-map validation.
//!
//! One canonical field-naming convention per contract type, kept in
//! lockstep with the template store: every slot a template references
//! appears in its type's required-field list, and vice versa (asserted by
//! the template store's tests).

use crate::contracts::{ContractType, FieldMap};
use crate::error::GenerateError;

/// Required field names for a contract type, in template order.
pub fn required_fields(contract_type: ContractType) -> &'static [&'static str] {
    match contract_type {
        ContractType::TenancyAgreement => &[
            "landlord_name",
            "tenant_name",
            "property_address",
            "rent_amount",
            "term",
        ],
        ContractType::EmploymentContract => &[
            "employer_name",
            "employee_name",
            "position",
            "salary",
            "term",
        ],
        ContractType::Nda => &["disclosing_party", "receiving_party", "purpose", "term"],
        ContractType::ServiceAgreement => &[
            "service_provider",
            "client",
            "service_description",
            "scope",
            "payment_terms",
            "term",
        ],
        ContractType::PartnershipAgreement => &[
            "partner1_name",
            "partner2_name",
            "business_name",
            "business_purpose",
            "capital_contributions",
            "profit_sharing",
            "management_roles",
            "term",
        ],
        ContractType::ConsultingAgreement => &[
            "consultant_name",
            "client_name",
            "consulting_services",
            "deliverables",
            "payment_terms",
            "term",
        ],
        ContractType::LoanAgreement => &[
            "lender_name",
            "borrower_name",
            "loan_amount",
            "interest_rate",
            "repayment_terms",
            "collateral",
            "term",
        ],
        ContractType::SoftwareLicense => &[
            "licensor_name",
            "licensee_name",
            "software_name",
            "license_type",
            "number_of_users",
            "license_fee",
            "term",
        ],
    }
}

/// Validate that `fields` contains every required field for `contract_type`.
///
/// Reports every missing field in one error, sorted by name, so a caller
/// can re-prompt for all of them at once. No side effects.
pub fn validate(contract_type: ContractType, fields: &FieldMap) -> Result<(), GenerateError> {
    let mut missing: Vec<String> = required_fields(contract_type)
        .iter()
        .filter(|field| !fields.contains_key(**field))
        .map(|field| field.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        missing.sort_unstable();
        Err(GenerateError::MissingFields(missing))
    }
}
