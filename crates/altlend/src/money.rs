//! Rupee formatting for console output.

/// Render a whole-rupee amount with Indian digit grouping, e.g. `₹25,00,000`.
pub fn format_inr(amount: u64) -> String {
    format!("₹{}", group_indian(amount))
}

/// Render an amount in lakhs with one decimal, e.g. `152.5L`.
pub fn format_lakhs(amount: f64) -> String {
    format!("{:.1}L", amount / 100_000.0)
}

fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_lakh_and_crore() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
        assert_eq!(format_inr(1_000), "₹1,000");
        assert_eq!(format_inr(45_000), "₹45,000");
        assert_eq!(format_inr(2_500_000), "₹25,00,000");
        assert_eq!(format_inr(152_500_000), "₹15,25,00,000");
    }

    #[test]
    fn lakhs_keep_one_decimal() {
        assert_eq!(format_lakhs(15_250_000.0), "152.5L");
        assert_eq!(format_lakhs(50_000.0), "0.5L");
    }
}
