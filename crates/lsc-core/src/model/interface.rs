use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// IOS-XR configuration plane an interface entry belongs to.
///
/// `pre` configures interfaces that may not be present yet (pre-provisioning)
/// and is what every URL in this workspace uses by default.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActiveState {
    #[default]
    Pre,
    Act,
}

/// Description and state of one interface on a mounted device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceSpec {
    /// Mount name of the owning device.
    pub device: String,
    /// IOS-XR interface name, e.g. `GigabitEthernet0/0/0/1`.
    pub name: String,
    pub description: String,
    pub active: ActiveState,
}

impl InterfaceSpec {
    pub fn new(
        device: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            device: device.into(),
            name: name.into(),
            description: description.into(),
            active: ActiveState::default(),
        }
    }
}
