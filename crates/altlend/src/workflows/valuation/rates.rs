use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{CircleRate, RateSource, ValuationError};

/// Circle-rate lookup table. The first row doubles as the fallback for
/// localities the table does not cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircleRateTable {
    rates: Vec<CircleRate>,
}

impl CircleRateTable {
    pub fn new(rates: Vec<CircleRate>) -> Result<Self, ValuationError> {
        if rates.is_empty() {
            return Err(ValuationError::EmptyRateTable);
        }
        Ok(Self { rates })
    }

    /// Built-in rates for the cities the desk currently serves.
    pub fn standard() -> Self {
        let row = |city: &str, area: &str, circle_rate, market_rate| CircleRate {
            city: city.to_string(),
            area: area.to_string(),
            circle_rate,
            market_rate,
        };

        Self {
            rates: vec![
                row("Pune", "Baner", 12_500, 18_000),
                row("Indore", "Vijay Nagar", 8_500, 12_000),
                row("Nashik", "College Road", 6_800, 9_500),
            ],
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ValuationError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse `city,area,circle_rate,market_rate` rows. Rates may carry
    /// thousands separators ("12,500").
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ValuationError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rates = Vec::new();
        for record in csv_reader.deserialize::<CircleRateRow>() {
            rates.push(record?.into_rate()?);
        }

        Self::new(rates)
    }

    pub fn rates(&self) -> &[CircleRate] {
        &self.rates
    }

    /// Row whose city equals `city` and whose area contains `area`, both
    /// ignoring case; otherwise the fallback row.
    pub fn lookup(&self, city: &str, area: &str) -> (&CircleRate, RateSource) {
        let city = city.trim().to_lowercase();
        let area = area.trim().to_lowercase();

        let matched = self.rates.iter().find(|rate| {
            rate.city.to_lowercase() == city && rate.area.to_lowercase().contains(&area)
        });

        match matched {
            Some(rate) => (rate, RateSource::Matched),
            None => (&self.rates[0], RateSource::Fallback),
        }
    }
}

impl Default for CircleRateTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Deserialize)]
struct CircleRateRow {
    city: String,
    area: String,
    circle_rate: String,
    market_rate: String,
}

impl CircleRateRow {
    fn into_rate(self) -> Result<CircleRate, ValuationError> {
        let circle_rate = parse_rupees(&self.circle_rate);
        let market_rate = parse_rupees(&self.market_rate);

        match (circle_rate, market_rate) {
            (Some(circle_rate), Some(market_rate)) => Ok(CircleRate {
                city: self.city,
                area: self.area,
                circle_rate,
                market_rate,
            }),
            (None, _) => Err(ValuationError::InvalidRate {
                city: self.city,
                area: self.area,
                value: self.circle_rate,
            }),
            (_, None) => Err(ValuationError::InvalidRate {
                city: self.city,
                area: self.area,
                value: self.market_rate,
            }),
        }
    }
}

fn parse_rupees(raw: &str) -> Option<u64> {
    let digits: String = raw
        .trim()
        .trim_start_matches('₹')
        .chars()
        .filter(|ch| *ch != ',')
        .collect();
    digits.trim().parse().ok().filter(|rate| *rate > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_city_exactly_and_area_by_substring() {
        let table = CircleRateTable::standard();

        let (rate, source) = table.lookup("indore", "vijay");
        assert_eq!(source, RateSource::Matched);
        assert_eq!(rate.circle_rate, 8_500);

        let (rate, source) = table.lookup("Nashik", "COLLEGE ROAD");
        assert_eq!(source, RateSource::Matched);
        assert_eq!(rate.market_rate, 9_500);
    }

    #[test]
    fn unknown_localities_use_the_first_row() {
        let table = CircleRateTable::standard();

        let (rate, source) = table.lookup("Mumbai", "Andheri");
        assert_eq!(source, RateSource::Fallback);
        assert_eq!(rate.city, "Pune");

        // The area must belong to the requested city.
        let (_, source) = table.lookup("Indore", "Baner");
        assert_eq!(source, RateSource::Fallback);
    }

    #[test]
    fn parses_csv_with_thousands_separators() {
        let csv = "city,area,circle_rate,market_rate\n\
                   Nagpur,Dharampeth,\"7,200\",\"10,400\"\n\
                   Surat, Adajan ,6400,8800\n";
        let table = CircleRateTable::from_reader(csv.as_bytes()).expect("table parses");

        assert_eq!(table.rates().len(), 2);
        assert_eq!(table.rates()[0].circle_rate, 7_200);
        assert_eq!(table.rates()[0].market_rate, 10_400);
        assert_eq!(table.rates()[1].area, "Adajan");
    }

    #[test]
    fn rejects_unparseable_rates() {
        let csv = "city,area,circle_rate,market_rate\nNagpur,Dharampeth,n/a,10400\n";
        match CircleRateTable::from_reader(csv.as_bytes()) {
            Err(ValuationError::InvalidRate { value, .. }) => assert_eq!(value, "n/a"),
            other => panic!("expected invalid rate, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_tables() {
        let csv = "city,area,circle_rate,market_rate\n";
        assert!(matches!(
            CircleRateTable::from_reader(csv.as_bytes()),
            Err(ValuationError::EmptyRateTable)
        ));
    }

    #[test]
    fn parse_rupees_accepts_symbols_and_commas() {
        assert_eq!(parse_rupees("₹12,500"), Some(12_500));
        assert_eq!(parse_rupees(" 9500 "), Some(9_500));
        assert_eq!(parse_rupees("0"), None);
        assert_eq!(parse_rupees("-1"), None);
    }
}
