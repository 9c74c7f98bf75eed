//! Operator roles

wire_status! {
    /// Role of the signed-in operator
    pub enum Role {
        /// Manufacturer-side operator
        EvmStaff => "evm_staff",
        Admin => "admin",
        DealerManager => "dealer_manager",
        DealerStaff => "dealer_staff",
    }
    default = DealerStaff;
}

impl Role {
    /// Manufacturer-side operator; gates dispatch and dealer order status edits
    pub fn is_evm_staff(&self) -> bool {
        matches!(self, Self::EvmStaff)
    }
}
