//! Client-side order filtering.

use crate::models::{Order, OrderStatus};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => order.status == *status,
        }
    }

    /// Every filter in display order, `All` first.
    pub fn options() -> Vec<StatusFilter> {
        std::iter::once(StatusFilter::All)
            .chain(OrderStatus::iter().map(StatusFilter::Only))
            .collect()
    }

    /// The filter after this one, wrapping back to `All`.
    pub fn next(self) -> Self {
        let options = Self::options();
        let position = options.iter().position(|f| *f == self).unwrap_or(0);
        options[(position + 1) % options.len()]
    }

    pub fn previous(self) -> Self {
        let options = Self::options();
        let position = options.iter().position(|f| *f == self).unwrap_or(0);
        options[(position + options.len() - 1) % options.len()]
    }
}

impl FromStr for StatusFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse::<OrderStatus>().map(StatusFilter::Only)
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

/// Orders matching `filter`, in their original order.
pub fn filter_orders(orders: &[Order], filter: StatusFilter) -> Vec<&Order> {
    orders.iter().filter(|order| filter.matches(order)).collect()
}
