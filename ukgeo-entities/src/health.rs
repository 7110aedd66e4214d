pub const STATUS_OK: &str = "ok";

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub healthy    : bool,
    pub epc_status : String,
    pub os_status  : String,
}
