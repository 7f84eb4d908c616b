// src/domain/dataset.rs

use crate::domain::listing::Listing;
use crate::errors::DataError;
use std::collections::BTreeSet;

/// The canonical, read-only listings table for one source location.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    listings: Vec<Listing>,
}

impl Dataset {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// `(min, max)` of a numeric column. Fails on an empty dataset instead of
    /// handing back a NaN or sentinel bound.
    pub fn column_range<F>(&self, column: &str, value: F) -> Result<(f64, f64), DataError>
    where
        F: Fn(&Listing) -> f64,
    {
        let mut values = self.listings.iter().map(value);
        let first = values.next().ok_or_else(|| DataError::EmptyDataset {
            column: column.to_string(),
        })?;

        Ok(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Sorted distinct values of a categorical column.
    pub fn distinct<T, F>(&self, value: F) -> Vec<T>
    where
        T: Ord,
        F: Fn(&Listing) -> T,
    {
        self.listings
            .iter()
            .map(value)
            .collect::<BTreeSet<T>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::fixtures::listing;

    #[test]
    fn column_range_on_empty_dataset_fails() {
        let err = Dataset::default()
            .column_range("price", |l| l.price)
            .unwrap_err();
        assert!(matches!(err, DataError::EmptyDataset { column } if column == "price"));
    }

    #[test]
    fn column_range_finds_extremes() {
        let mut a = listing(1);
        a.price = 150_000.0;
        let mut b = listing(2);
        b.price = 90_000.0;
        let mut c = listing(3);
        c.price = 310_500.0;

        let ds = Dataset::new(vec![a, b, c]);
        assert_eq!(
            ds.column_range("price", |l| l.price).unwrap(),
            (90_000.0, 310_500.0)
        );
    }

    #[test]
    fn distinct_values_are_sorted_and_unique() {
        let mut a = listing(1);
        a.municipality = "Mijas".to_string();
        let mut b = listing(2);
        b.municipality = "Estepona".to_string();
        let c = listing(3);
        let mut d = listing(4);
        d.municipality = "Mijas".to_string();

        let ds = Dataset::new(vec![a, b, c, d]);
        assert_eq!(
            ds.distinct(|l| l.municipality.clone()),
            vec!["Estepona", "Marbella", "Mijas"]
        );
    }
}
