use serde::Serialize;

/// A VLAN-aware flexible cross-connect service joining two attachment circuits.
///
/// Circuit order is significant: the controller echoes the circuits back
/// in list order and the first entry always maps to `circuit_1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct L2vpnSpec {
    pub device: String,
    /// EVPN instance identifier; the list key of the service.
    pub eviid: u32,
    pub circuit_1: String,
    pub circuit_2: String,
}

impl L2vpnSpec {
    pub fn new(
        device: impl Into<String>,
        eviid: u32,
        circuit_1: impl Into<String>,
        circuit_2: impl Into<String>,
    ) -> Self {
        Self {
            device: device.into(),
            eviid,
            circuit_1: circuit_1.into(),
            circuit_2: circuit_2.into(),
        }
    }

    pub fn circuits(&self) -> [&str; 2] {
        [&self.circuit_1, &self.circuit_2]
    }
}
