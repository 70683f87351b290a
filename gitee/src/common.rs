use serde::{de, ser, Deserialize, Serialize};
use std::fmt;

/// A git object id
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Oid(String);

impl Oid {
    pub fn sha(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DateTime(chrono::DateTime<chrono::Utc>);

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}

// DateTime's from Gitee are RFC 3339 strings, usually with a +08:00 offset
impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct DateTimeVisitor;
        impl<'de> de::Visitor<'de> for DateTimeVisitor {
            type Value = DateTime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "an rfc 3339 date time string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                chrono::DateTime::parse_from_rfc3339(v)
                    .map(|datetime| DateTime(datetime.with_timezone(&chrono::Utc)))
                    .map_err(|e| E::custom(format!("{}", e)))
            }
        }

        deserializer.deserialize_str(DateTimeVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::DateTime;

    #[test]
    fn datetime_with_offset() {
        let datetime: DateTime = serde_json::from_str(r#""2020-05-07T17:04:24+08:00""#).unwrap();
        let utc: DateTime = serde_json::from_str(r#""2020-05-07T09:04:24Z""#).unwrap();
        assert_eq!(datetime, utc);
    }
}
