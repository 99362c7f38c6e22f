//! Plain data row types written by output backends.

/// One departed customer's final record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomerResultRow {
    pub customer_id:     u32,
    /// Tick the customer left the floor.
    pub depart_tick:     u64,
    pub wait_time:       u32,
    /// Final satisfaction, `[0, 100]`.
    pub satisfaction:    i32,
    pub finished_eating: bool,
    /// Amount settled into the balance for this customer.
    pub profit:          f32,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:                u64,
    /// Balance at end of tick.
    pub profit:              f32,
    pub active_customers:    u64,
    pub queued_customers:    u64,
    pub executing_servos:    u64,
    pub completed_customers: u64,
}
