use super::domain::{CustomerProfile, CustomerSegment, CustomerSignals};

/// Demo borrowers used to populate the intake form.
pub fn sample_customers() -> Vec<CustomerProfile> {
    vec![
        CustomerProfile {
            name: "Rohit Sharma".to_string(),
            age: Some(28),
            segment: Some(CustomerSegment::Salaried),
            location: Some("Pune".to_string()),
            requested_loan_amount: Some(2_500_000),
            mobile: Some("9876543210".to_string()),
            pan: Some("ABCDE1234F".to_string()),
            average_monthly_spend: 45_000,
            on_time_payment_pct: 92,
            signals: CustomerSignals {
                transaction_count: 450,
                payment_failure_count: 2,
                utility_payment_score: 85,
                risk_score: 720,
            },
        },
        CustomerProfile {
            name: "Shabir Ahmed".to_string(),
            age: Some(35),
            segment: Some(CustomerSegment::MsmeOwner),
            location: Some("Indore".to_string()),
            requested_loan_amount: Some(1_800_000),
            mobile: Some("9876543211".to_string()),
            pan: Some("FGHIJ5678K".to_string()),
            average_monthly_spend: 32_000,
            on_time_payment_pct: 88,
            signals: CustomerSignals {
                transaction_count: 280,
                payment_failure_count: 5,
                utility_payment_score: 78,
                risk_score: 680,
            },
        },
    ]
}

/// First sample whose name contains `query`, ignoring case and surrounding
/// whitespace. Blank queries never match.
pub fn find_sample(query: &str) -> Option<CustomerProfile> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    sample_customers()
        .into_iter()
        .find(|customer| customer.name.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_partial_names_case_insensitively() {
        let customer = find_sample("  rohit ").expect("partial match");
        assert_eq!(customer.name, "Rohit Sharma");
        assert_eq!(customer.signals.risk_score, 720);

        let customer = find_sample("AHMED").expect("surname match");
        assert_eq!(customer.segment, Some(CustomerSegment::MsmeOwner));
    }

    #[test]
    fn blank_and_unknown_queries_do_not_match() {
        assert!(find_sample("").is_none());
        assert!(find_sample("   ").is_none());
        assert!(find_sample("Priya Nair").is_none());
    }
}
