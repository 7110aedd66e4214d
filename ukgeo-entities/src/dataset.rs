use strum::{Display, EnumIter};

/// The offline reference datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Dataset {
    /// Address -> UPRN (EPC register)
    #[strum(to_string = "EPC")]
    EpcAddresses,
    /// UPRN -> coordinates
    #[strum(to_string = "OS Open UPRN")]
    OsOpenUprn,
}

impl Dataset {
    pub const fn expected_tables(self) -> &'static [&'static str] {
        match self {
            Self::EpcAddresses => &["epc_addresses"],
            Self::OsOpenUprn => &["uprns"],
        }
    }
}
