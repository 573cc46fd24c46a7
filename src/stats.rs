//! Dashboard figures derived from the loaded product and order lists.

use crate::consts::cli_consts::RECENT_ORDERS;
use crate::models::{Order, OrderStatus, Product};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardStats {
    pub total_products: usize,
    pub total_orders: usize,
    pub pending_orders: usize,
    /// Sum of `total_price` over every loaded order.
    pub total_revenue: f64,
    /// Newest orders first.
    pub recent_orders: Vec<Order>,
}

impl DashboardStats {
    pub fn compute(products: &[Product], orders: &[Order]) -> Self {
        let mut recent_orders = orders.to_vec();
        recent_orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent_orders.truncate(RECENT_ORDERS);

        Self {
            total_products: products.len(),
            total_orders: orders.len(),
            pending_orders: orders
                .iter()
                .filter(|order| order.status == OrderStatus::Pending)
                .count(),
            total_revenue: orders.iter().map(|order| order.total_price).sum(),
            recent_orders,
        }
    }
}
