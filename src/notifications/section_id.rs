// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

use crate::errors::SectionIdError;

/// Address of a section of the notification log: the ids of its first and
/// last notification, written `"first,last"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionId {
    pub first: u64,
    pub last: u64,
}

impl SectionId {
    pub fn new(first: u64, last: u64) -> Self {
        Self { first, last }
    }

    pub fn parse(section_id: &str) -> Result<Self, SectionIdError> {
        let mut parts = section_id.split(',');
        let (Some(first), Some(last), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(SectionIdError::Malformed(section_id.to_string()));
        };

        let number = |part: &str| {
            part.trim()
                .parse::<u64>()
                .map_err(|_| SectionIdError::NotANumber {
                    section_id: section_id.to_string(),
                    part: part.to_string(),
                })
        };

        Ok(Self {
            first: number(first)?,
            last: number(last)?,
        })
    }
}

impl FromStr for SectionId {
    type Err = SectionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.first, self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ids() {
        assert_eq!(SectionId::parse("1,10").unwrap(), SectionId::new(1, 10));
        assert_eq!(SectionId::parse(" 21 , 30 ").unwrap(), SectionId::new(21, 30));
        assert_eq!(SectionId::parse("0,0").unwrap(), SectionId::new(0, 0));
        // Reversed bounds parse; paging turns them into an empty section
        assert_eq!(SectionId::parse("10,1").unwrap(), SectionId::new(10, 1));
    }

    #[test]
    fn test_parse_invalid_ids_table_driven() {
        struct TestCase {
            name: &'static str,
            input: &'static str,
            expected: SectionIdError,
        }

        let test_cases = vec![
            TestCase {
                name: "empty",
                input: "",
                expected: SectionIdError::Malformed("".to_string()),
            },
            TestCase {
                name: "single number",
                input: "10",
                expected: SectionIdError::Malformed("10".to_string()),
            },
            TestCase {
                name: "three parts",
                input: "1,2,3",
                expected: SectionIdError::Malformed("1,2,3".to_string()),
            },
            TestCase {
                name: "letters",
                input: "a,10",
                expected: SectionIdError::NotANumber {
                    section_id: "a,10".to_string(),
                    part: "a".to_string(),
                },
            },
            TestCase {
                name: "negative",
                input: "1,-5",
                expected: SectionIdError::NotANumber {
                    section_id: "1,-5".to_string(),
                    part: "-5".to_string(),
                },
            },
            TestCase {
                name: "negative first",
                input: "-3,10",
                expected: SectionIdError::NotANumber {
                    section_id: "-3,10".to_string(),
                    part: "-3".to_string(),
                },
            },
            TestCase {
                name: "missing last",
                input: "1,",
                expected: SectionIdError::NotANumber {
                    section_id: "1,".to_string(),
                    part: "".to_string(),
                },
            },
        ];

        for test_case in test_cases {
            assert_eq!(
                SectionId::parse(test_case.input).unwrap_err(),
                test_case.expected,
                "Test case '{}' failed",
                test_case.name
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(SectionId::new(11, 20).to_string(), "11,20");
        assert_eq!("11,20".parse::<SectionId>().unwrap().to_string(), "11,20");
    }
}
