use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a field is entered and checked before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Url,
}

/// One of the five draft fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Name,
    Tenant,
    Product,
    AcsUrl,
    EntityId,
}

impl FieldKey {
    /// All fields in the order the form shows them.
    pub const ALL: [FieldKey; 5] = [
        FieldKey::Name,
        FieldKey::Tenant,
        FieldKey::Product,
        FieldKey::AcsUrl,
        FieldKey::EntityId,
    ];

    /// Element id, which is also the JSON key on the wire.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Tenant => "tenant",
            FieldKey::Product => "product",
            FieldKey::AcsUrl => "acsUrl",
            FieldKey::EntityId => "entityId",
        }
    }

    #[must_use]
    pub fn kind(self) -> InputKind {
        match self {
            FieldKey::AcsUrl | FieldKey::EntityId => InputKind::Url,
            _ => InputKind::Text,
        }
    }

    /// Translation key for the field label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Tenant => "tenant",
            FieldKey::Product => "product",
            FieldKey::AcsUrl => "acs_url",
            FieldKey::EntityId => "entity_id",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            FieldKey::Name => "Your app",
            FieldKey::Tenant => "boxyhq",
            FieldKey::Product => "saml-jackson",
            FieldKey::AcsUrl => "https://your-idp.com/saml/acs",
            FieldKey::EntityId => "https://your-idp.com/saml/entityId",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FieldKey {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.id() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Unsubmitted form state for a new federated SAML app.
///
/// Serializes to exactly the request body the creation endpoint expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub name: String,
    pub tenant: String,
    pub product: String,
    pub acs_url: String,
    pub entity_id: String,
}

impl Draft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Tenant => &self.tenant,
            FieldKey::Product => &self.product,
            FieldKey::AcsUrl => &self.acs_url,
            FieldKey::EntityId => &self.entity_id,
        }
    }

    /// Return a new draft with one field replaced.
    #[must_use]
    pub fn with_field(&self, key: FieldKey, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set_field(key, value);
        next
    }

    /// Replace one field in place.
    ///
    /// URL fields are sanitized the way a browser sanitizes `type=url`
    /// input values: line breaks removed, surrounding whitespace trimmed.
    pub fn set_field(&mut self, key: FieldKey, value: impl Into<String>) {
        let value = value.into();
        *self.slot(key) = match key.kind() {
            InputKind::Url => sanitize_url_value(&value),
            InputKind::Text => value,
        };
    }

    fn slot(&mut self, key: FieldKey) -> &mut String {
        match key {
            FieldKey::Name => &mut self.name,
            FieldKey::Tenant => &mut self.tenant,
            FieldKey::Product => &mut self.product,
            FieldKey::AcsUrl => &mut self.acs_url,
            FieldKey::EntityId => &mut self.entity_id,
        }
    }

    /// Check the draft the way a browser checks `required` and `type=url`
    /// inputs. Reports the first failing field in display order.
    pub fn validate(&self) -> Result<(), FormError> {
        for key in FieldKey::ALL {
            let value = self.get(key);
            if value.is_empty() {
                return Err(FormError::Required(key));
            }
            if key.kind() == InputKind::Url && reqwest::Url::parse(value).is_err() {
                return Err(FormError::InvalidUrl(key));
            }
        }
        Ok(())
    }
}

fn sanitize_url_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '\r' && *c != '\n')
        .collect::<String>()
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> Draft {
        Draft {
            name: "Acme".to_string(),
            tenant: "acme".to_string(),
            product: "app1".to_string(),
            acs_url: "https://idp.acme.com/acs".to_string(),
            entity_id: "https://idp.acme.com/entity".to_string(),
        }
    }

    #[test]
    fn test_field_ids_round_trip() {
        for key in FieldKey::ALL {
            assert_eq!(key.id().parse::<FieldKey>().unwrap(), key);
        }
        assert_eq!(
            "acs_url".parse::<FieldKey>(),
            Err(FormError::UnknownField("acs_url".to_string()))
        );
    }

    #[test]
    fn test_with_field_leaves_other_fields_alone() {
        let base = acme();
        let next = base.with_field(FieldKey::Tenant, "globex");

        assert_eq!(next.tenant, "globex");
        assert_eq!(base.tenant, "acme");
        for key in FieldKey::ALL.into_iter().filter(|k| *k != FieldKey::Tenant) {
            assert_eq!(next.get(key), base.get(key));
        }
    }

    #[test]
    fn test_last_write_wins() {
        let mut draft = Draft::new();
        draft.set_field(FieldKey::Name, "A");
        draft.set_field(FieldKey::Product, "p");
        draft.set_field(FieldKey::Name, "Ab");
        draft.set_field(FieldKey::Name, "Abc");

        assert_eq!(draft.name, "Abc");
        assert_eq!(draft.product, "p");
        assert!(draft.tenant.is_empty());
    }

    #[test]
    fn test_url_fields_are_sanitized() {
        let draft = Draft::new()
            .with_field(FieldKey::AcsUrl, "  https://idp.acme.com/acs\n")
            .with_field(FieldKey::EntityId, "\thttps://idp.acme.com/\r\nentity ");
        assert_eq!(draft.acs_url, "https://idp.acme.com/acs");
        assert_eq!(draft.entity_id, "https://idp.acme.com/entity");

        // Text fields keep what was typed
        let draft = draft.with_field(FieldKey::Name, "  Acme ");
        assert_eq!(draft.name, "  Acme ");

        // Whitespace-only URL input is empty, so it is reported as missing
        let mut draft = acme();
        draft.set_field(FieldKey::AcsUrl, " \n ");
        assert_eq!(draft.validate(), Err(FormError::Required(FieldKey::AcsUrl)));
    }

    #[test]
    fn test_validate() {
        assert!(acme().validate().is_ok());

        assert_eq!(
            Draft::new().validate(),
            Err(FormError::Required(FieldKey::Name))
        );
        assert_eq!(
            acme().with_field(FieldKey::Product, "").validate(),
            Err(FormError::Required(FieldKey::Product))
        );
        assert_eq!(
            acme().with_field(FieldKey::AcsUrl, "idp.acme.com/acs").validate(),
            Err(FormError::InvalidUrl(FieldKey::AcsUrl))
        );
        assert_eq!(
            acme().with_field(FieldKey::EntityId, "not a url").validate(),
            Err(FormError::InvalidUrl(FieldKey::EntityId))
        );

        // Text fields accept anything non-empty
        assert!(acme().with_field(FieldKey::Name, "my app!").validate().is_ok());
        // Non-http schemes are still URLs
        assert!(acme()
            .with_field(FieldKey::EntityId, "urn:acme:entity")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_serializes_camel_case_body() {
        let body = serde_json::to_value(acme()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Acme",
                "tenant": "acme",
                "product": "app1",
                "acsUrl": "https://idp.acme.com/acs",
                "entityId": "https://idp.acme.com/entity"
            })
        );
    }
}
