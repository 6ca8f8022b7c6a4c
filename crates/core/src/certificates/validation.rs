use super::certificates_model::NetWorthData;

/// Problems that block generating a certificate. Empty means ready.
///
/// `client_selected` is only meaningful when certificates are being saved;
/// callers without storage pass `true`.
pub fn validate_for_generation(data: &NetWorthData, client_selected: bool) -> Vec<String> {
    let mut problems = Vec::new();

    if data.individuals.is_empty() {
        problems.push("Add at least one individual".to_string());
    }
    for (index, individual) in data.individuals.iter().enumerate() {
        let position = index + 1;
        if individual.full_name.trim().is_empty() {
            problems.push(format!("Individual {}: full name is required", position));
        }
        if individual.passport().is_none() {
            problems.push(format!("Individual {}: passport number is required", position));
        }
        if individual.address_text().is_none() {
            problems.push(format!("Individual {}: address is required", position));
        }
    }

    if data.embassy_name.trim().is_empty() {
        problems.push("Embassy name is required".to_string());
    }

    if data.bank_accounts.is_empty() && data.properties.is_empty() {
        problems.push("Add at least one bank account or property".to_string());
    }

    if !client_selected {
        problems.push("Select or create a client before generating".to_string());
    }

    problems
}
