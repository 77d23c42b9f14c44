use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Known request error codes raised by the query engine.
///
/// Each variant serializes to the exact engine token (`"P2002"` etc).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum KnownErrorCode {
    /// Value too long for the column type
    P2000,
    /// Record in the where condition does not exist
    P2001,
    /// Unique constraint failed
    P2002,
    /// Foreign key constraint failed
    P2003,
    /// Database constraint failed
    P2004,
    /// Stored value invalid for the field type
    P2005,
    /// Provided value not valid for the field
    P2006,
    /// Data validation error
    P2007,
    /// Failed to parse the query
    P2008,
    /// Failed to validate the query
    P2009,
    /// Raw query failed
    P2010,
    /// Null constraint violation
    P2011,
    /// Missing a required value
    P2012,
    /// Missing a required argument
    P2013,
    /// Required relation violation
    P2014,
    /// Related record not found
    P2015,
    /// Query interpretation error
    P2016,
    /// Relation records not connected
    P2017,
    /// Required connected records not found
    P2018,
    /// Input error
    P2019,
    /// Value out of range
    P2020,
    /// Table does not exist
    P2021,
    /// Column does not exist
    P2022,
    /// Inconsistent column data
    P2023,
    /// Connection pool timeout
    P2024,
    /// Required records not found
    P2025,
    /// Unsupported provider feature
    P2026,
    /// Multiple database errors
    P2027,
    /// Transaction API error
    P2028,
    /// Full-text index not found
    P2030,
    /// MongoDB replica set required
    P2031,
    /// Number does not fit in a 64-bit signed integer
    P2033,
    /// Write conflict or deadlock
    P2034,
}

impl KnownErrorCode {
    /// Every code in table order.
    pub const ALL: [KnownErrorCode; 33] = [
        Self::P2000,
        Self::P2001,
        Self::P2002,
        Self::P2003,
        Self::P2004,
        Self::P2005,
        Self::P2006,
        Self::P2007,
        Self::P2008,
        Self::P2009,
        Self::P2010,
        Self::P2011,
        Self::P2012,
        Self::P2013,
        Self::P2014,
        Self::P2015,
        Self::P2016,
        Self::P2017,
        Self::P2018,
        Self::P2019,
        Self::P2020,
        Self::P2021,
        Self::P2022,
        Self::P2023,
        Self::P2024,
        Self::P2025,
        Self::P2026,
        Self::P2027,
        Self::P2028,
        Self::P2030,
        Self::P2031,
        Self::P2033,
        Self::P2034,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P2000 => "P2000",
            Self::P2001 => "P2001",
            Self::P2002 => "P2002",
            Self::P2003 => "P2003",
            Self::P2004 => "P2004",
            Self::P2005 => "P2005",
            Self::P2006 => "P2006",
            Self::P2007 => "P2007",
            Self::P2008 => "P2008",
            Self::P2009 => "P2009",
            Self::P2010 => "P2010",
            Self::P2011 => "P2011",
            Self::P2012 => "P2012",
            Self::P2013 => "P2013",
            Self::P2014 => "P2014",
            Self::P2015 => "P2015",
            Self::P2016 => "P2016",
            Self::P2017 => "P2017",
            Self::P2018 => "P2018",
            Self::P2019 => "P2019",
            Self::P2020 => "P2020",
            Self::P2021 => "P2021",
            Self::P2022 => "P2022",
            Self::P2023 => "P2023",
            Self::P2024 => "P2024",
            Self::P2025 => "P2025",
            Self::P2026 => "P2026",
            Self::P2027 => "P2027",
            Self::P2028 => "P2028",
            Self::P2030 => "P2030",
            Self::P2031 => "P2031",
            Self::P2033 => "P2033",
            Self::P2034 => "P2034",
        }
    }

    /// Parse a raw engine token, returning `None` for anything outside the table.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|code| code.as_str() == token)
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::P2001 => StatusCode::NOT_FOUND,

            Self::P2002 | Self::P2014 | Self::P2034 => StatusCode::CONFLICT,

            Self::P2000
            | Self::P2003
            | Self::P2005
            | Self::P2006
            | Self::P2011
            | Self::P2012
            | Self::P2013
            | Self::P2017
            | Self::P2018
            | Self::P2019
            | Self::P2020
            | Self::P2025
            | Self::P2026
            | Self::P2030
            | Self::P2031
            | Self::P2033 => StatusCode::BAD_REQUEST,

            Self::P2004
            | Self::P2007
            | Self::P2008
            | Self::P2009
            | Self::P2010
            | Self::P2015
            | Self::P2016
            | Self::P2021
            | Self::P2022
            | Self::P2023
            | Self::P2024
            | Self::P2027
            | Self::P2028 => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for KnownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token is not one of the known request error codes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error code: {0}")]
pub struct UnknownErrorCode(pub String);

impl FromStr for KnownErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}
