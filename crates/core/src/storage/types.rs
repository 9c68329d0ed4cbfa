use rust_decimal::Decimal;

/// Opaque pagination cursor returned by a scan.
///
/// Callers must hand it back unchanged to resume where the previous page
/// stopped. Only the backend that produced it knows what it contains.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContinuationToken(String);

impl ContinuationToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of a scan, plus the cursor for the next page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// `None` once the collection is exhausted.
    pub next: Option<ContinuationToken>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next: Option<ContinuationToken>) -> Self {
        Self { items, next }
    }

    /// Returns true if no further pages follow this one.
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// Exclusive upper bound on a product's price.
///
/// Items without a price never pass the filter, matching how the store
/// evaluates `price < :max_price` against a missing attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceCeiling(Decimal);

impl PriceCeiling {
    pub fn new(max_price: Decimal) -> Self {
        Self(max_price)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if `price` is strictly below the ceiling.
    pub fn admits(&self, price: Option<Decimal>) -> bool {
        price.is_some_and(|price| price < self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceiling_is_exclusive() {
        let ceiling = PriceCeiling::new(Decimal::new(1500, 2));

        assert!(ceiling.admits(Some(Decimal::new(1499, 2))));
        assert!(!ceiling.admits(Some(Decimal::new(15, 0))));
        assert!(!ceiling.admits(Some(Decimal::new(20, 0))));
    }

    #[test]
    fn test_ceiling_rejects_missing_price() {
        let ceiling = PriceCeiling::new(Decimal::new(100, 0));
        assert!(!ceiling.admits(None));
    }

    #[test]
    fn test_ceiling_compares_exact_decimals() {
        // 0.1 + 0.2 is exactly 0.3 in decimal arithmetic.
        let price = Decimal::new(1, 1) + Decimal::new(2, 1);
        let ceiling = PriceCeiling::new(Decimal::new(3, 1));

        assert!(!ceiling.admits(Some(price)));
    }

    #[test]
    fn test_page_is_last() {
        let page = Page::new(vec![1, 2, 3], None);
        assert!(page.is_last());

        let page = Page::new(vec![1], Some(ContinuationToken::new("p-1")));
        assert!(!page.is_last());
        assert_eq!(page.next.unwrap().as_str(), "p-1");
    }
}
