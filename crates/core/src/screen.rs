use crate::draft::{Draft, FieldKey, InputKind};
use crate::navigation::APPS_INDEX_PATH;
use crate::ports::Translator;

/// Everything the host needs to draw the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// License gate did not pass; nothing else is shown
    LicenseRequired { message: String },
    Form(FormView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub back: LinkView,
    pub heading: String,
    pub description: String,
    pub fields: Vec<FieldView>,
    pub submit: ButtonView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub key: FieldKey,
    pub id: &'static str,
    pub label: String,
    pub kind: InputKind,
    pub placeholder: &'static str,
    pub value: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    /// Submission pending
    pub busy: bool,
}

/// Lay out the screen for the current state.
pub fn compose_screen<T: Translator + ?Sized>(
    translator: &T,
    licensed: bool,
    draft: &Draft,
    in_flight: bool,
) -> Screen {
    if !licensed {
        return Screen::LicenseRequired {
            message: translator.translate("license_required"),
        };
    }

    let fields = FieldKey::ALL
        .into_iter()
        .map(|key| FieldView {
            key,
            id: key.id(),
            label: translator.translate(key.label_key()),
            kind: key.kind(),
            placeholder: key.placeholder(),
            value: draft.get(key).to_string(),
            required: true,
        })
        .collect();

    Screen::Form(FormView {
        back: LinkView {
            href: APPS_INDEX_PATH.to_string(),
            label: translator.translate("back"),
        },
        heading: translator.translate("saml_federation_add_new_app"),
        description: translator.translate("saml_federation_add_new_app_description"),
        fields,
        submit: ButtonView {
            label: translator.translate("create_app"),
            busy: in_flight,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;

    #[test]
    fn test_unlicensed_shows_only_the_gate() {
        let screen = compose_screen(&Catalog::default(), false, &Draft::new(), false);
        assert_eq!(
            screen,
            Screen::LicenseRequired {
                message: "This feature requires a valid Enterprise License.".to_string()
            }
        );
    }

    #[test]
    fn test_form_layout() {
        let draft = Draft::new().with_field(FieldKey::Tenant, "acme");
        let Screen::Form(form) = compose_screen(&Catalog::default(), true, &draft, true) else {
            panic!("expected form");
        };

        assert_eq!(form.back.href, "/admin/federated-saml");
        assert_eq!(form.back.label, "Back");
        assert_eq!(form.heading, "Add SAML Federation App");
        assert_eq!(form.submit.label, "Create App");
        assert!(form.submit.busy);

        let ids: Vec<_> = form.fields.iter().map(|f| f.id).collect();
        assert_eq!(ids, ["name", "tenant", "product", "acsUrl", "entityId"]);
        assert!(form.fields.iter().all(|f| f.required));
        assert_eq!(form.fields[1].value, "acme");
        assert_eq!(form.fields[3].label, "ACS URL");
        assert_eq!(form.fields[3].kind, InputKind::Url);
        assert_eq!(form.fields[2].placeholder, "saml-jackson");
    }
}
