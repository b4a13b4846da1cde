use super::{Format, error::Error};
use quick_xml::events::BytesStart;
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

/// Attribute table of one XML element, converted field by field on demand.
///
/// Every conversion failure is reported against the element's format and
/// byte position together with the offending attribute name.
#[derive(Debug, Clone)]
pub struct Attributes {
    format: Format,
    position: u64,
    values: HashMap<String, String>,
}

impl Attributes {
    pub fn from_element(
        element: &BytesStart<'_>,
        format: Format,
        position: u64,
    ) -> Result<Self, Error> {
        let mut values = HashMap::new();
        for attr in element.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            values.insert(key, value);
        }
        Ok(Self {
            format,
            position,
            values,
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.trim())
    }

    pub fn required<T>(&self, key: &str) -> Result<T, Error>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self
            .get(key)
            .ok_or_else(|| self.error(format!("missing required attribute '{key}'")))?;
        self.convert(key, raw)
    }

    pub fn optional<T>(&self, key: &str) -> Result<Option<T>, Error>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.get(key).map(|raw| self.convert(key, raw)).transpose()
    }

    /// Builds a parse error located at this element.
    pub fn error(&self, details: impl Into<String>) -> Error {
        Error::parse(self.format, self.position, details)
    }

    fn convert<T>(&self, key: &str, raw: &str) -> Result<T, Error>
    where
        T: FromStr,
        T::Err: Display,
    {
        raw.parse()
            .map_err(|e| self.error(format!("invalid value '{raw}' for attribute '{key}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::events::Event;
    use quick_xml::reader::Reader;

    fn attributes(xml: &str) -> Attributes {
        let mut reader = Reader::from_str(xml);
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) | Event::Empty(e) => {
                    return Attributes::from_element(&e, Format::ParticleXml, 7).unwrap();
                }
                Event::Eof => panic!("no element in {xml}"),
                _ => {}
            }
        }
    }

    #[test]
    fn required_and_optional_fields() {
        let attrs = attributes(r#"<particle id="211" name="pi+" m0=" 0.13957 "/>"#);
        assert_eq!(attrs.required::<i32>("id").unwrap(), 211);
        assert_eq!(attrs.required::<String>("name").unwrap(), "pi+");
        assert!((attrs.required::<f64>("m0").unwrap() - 0.13957).abs() < 1e-12);
        assert_eq!(attrs.optional::<f64>("tau0").unwrap(), None);
    }

    #[test]
    fn escaped_values_are_unescaped() {
        let attrs = attributes(r#"<particle name="K&apos;" />"#);
        assert_eq!(attrs.get("name"), Some("K'"));
    }

    #[test]
    fn missing_attribute_names_the_key() {
        let attrs = attributes(r#"<particle id="11"/>"#);
        let err = attrs.required::<f64>("m0").unwrap_err();
        match err {
            Error::Parse {
                format,
                position,
                details,
            } => {
                assert_eq!(format, Format::ParticleXml);
                assert_eq!(position, 7);
                assert!(details.contains("'m0'"), "{details}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_value_is_reported() {
        let attrs = attributes(r#"<particle id="eleven"/>"#);
        let err = attrs.required::<i32>("id").unwrap_err();
        assert!(err.to_string().contains("invalid value 'eleven' for attribute 'id'"));

        let err = attrs.optional::<i32>("id").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
