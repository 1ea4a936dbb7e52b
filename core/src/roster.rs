//! Committee roster: the thirteen participants whose dots populate the
//! projection plot. Only the stance matters to the engine; names and
//! seats are carried for the UI.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    VeryHawkish,
    Hawkish,
    Centrist,
    Dovish,
    VeryDovish,
}

impl Stance {
    /// Per-meeting rate-path preference, in percentage points.
    pub fn bias(self) -> f64 {
        match self {
            Self::VeryHawkish => 0.094,
            Self::Hawkish => 0.0625,
            Self::Centrist => 0.0,
            Self::Dovish => -0.0625,
            Self::VeryDovish => -0.094,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Participant {
    pub name: &'static str,
    pub seat: &'static str,
    pub stance: Stance,
}

/// Seven board members plus six regional presidents.
pub const COMMITTEE: [Participant; 13] = [
    Participant { name: "Jerome H. Powell", seat: "Chair", stance: Stance::Centrist },
    Participant { name: "Philip N. Jefferson", seat: "Vice Chair", stance: Stance::Dovish },
    Participant { name: "Michelle W. Bowman", seat: "Governor", stance: Stance::Hawkish },
    Participant { name: "Michael S. Barr", seat: "Governor", stance: Stance::Dovish },
    Participant { name: "Lisa D. Cook", seat: "Governor", stance: Stance::Dovish },
    Participant { name: "Stephen I. Miran", seat: "Governor", stance: Stance::VeryDovish },
    Participant { name: "Christopher J. Waller", seat: "Governor", stance: Stance::Dovish },
    Participant { name: "John C. Williams", seat: "New York", stance: Stance::Centrist },
    Participant { name: "Beth M. Hammack", seat: "Cleveland", stance: Stance::Hawkish },
    Participant { name: "Patrick T. Harker", seat: "Philadelphia", stance: Stance::Centrist },
    Participant { name: "Lorie K. Logan", seat: "Dallas", stance: Stance::Hawkish },
    Participant { name: "Neel Kashkari", seat: "Minneapolis", stance: Stance::Dovish },
    Participant { name: "Anna Paulson", seat: "Chicago", stance: Stance::Centrist },
];
