use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d\s+()-]{6,}$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Salon,
    City,
    Phone,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Salon,
        Field::City,
        Field::Phone,
        Field::Email,
        Field::Message,
    ];

    /// Form field name, also the element id in the page.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "nome",
            Field::Salon => "salone",
            Field::City => "citta",
            Field::Phone => "telefono",
            Field::Email => "email",
            Field::Message => "messaggio",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nome e cognome",
            Field::Salon => "Nome del salone",
            Field::City => "Città",
            Field::Phone => "Telefono",
            Field::Email => "Email",
            Field::Message => "Messaggio",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Field::Name | Field::Salon | Field::City => "Almeno 2 caratteri.",
            Field::Phone => "Inserisci un numero valido.",
            Field::Email => "Inserisci un indirizzo email valido.",
            Field::Message => "Almeno 10 caratteri.",
        }
    }

    pub fn accepts(self, value: &str) -> bool {
        let value = value.trim();
        match self {
            Field::Name | Field::Salon | Field::City => value.chars().count() >= 2,
            Field::Phone => PHONE_RE.is_match(value),
            Field::Email => EMAIL_RE.is_match(value),
            Field::Message => value.chars().count() >= 10,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub salon: String,
    pub city: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Salon => &self.salon,
            Field::City => &self.city,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Salon => &mut self.salon,
            Field::City => &mut self.city,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Key/value payload in field order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        Field::ALL.iter().map(|f| (f.name(), self.get(*f))).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    pub invalid: Vec<Field>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    pub fn first_invalid(&self) -> Option<Field> {
        self.invalid.first().copied()
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    pub fn clear(&mut self, field: Field) {
        self.invalid.retain(|f| *f != field);
    }
}

pub fn validate(form: &ContactForm) -> Validation {
    Validation {
        invalid: Field::ALL
            .iter()
            .copied()
            .filter(|f| !f.accepts(form.get(*f)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Giulia Rossi".into(),
            salon: "Salone Aurora".into(),
            city: "Bologna".into(),
            phone: "+39 (051) 123-456".into(),
            email: "giulia@aurora.it".into(),
            message: "Vorrei una demo per il mio salone.".into(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert!(validate(&filled()).is_valid());
    }

    #[test]
    fn empty_form_flags_every_field_in_order() {
        let v = validate(&ContactForm::default());
        assert_eq!(v.invalid, Field::ALL.to_vec());
        assert_eq!(v.first_invalid(), Some(Field::Name));
    }

    #[test]
    fn values_are_trimmed_before_checking() {
        assert!(!Field::Name.accepts("  a  "));
        assert!(Field::City.accepts("  Bo "));
        assert!(!Field::Message.accepts("   corto    "));
    }

    #[test]
    fn phone_rules() {
        assert!(Field::Phone.accepts("333 1234567"));
        assert!(Field::Phone.accepts("(+39)051-22"));
        assert!(!Field::Phone.accepts("12345"));
        assert!(!Field::Phone.accepts("333-CALL-ME"));
    }

    #[test]
    fn email_rules() {
        assert!(Field::Email.accepts(" info@salone.it "));
        assert!(!Field::Email.accepts("info@salone"));
        assert!(!Field::Email.accepts("info salone@x.it"));
        assert!(!Field::Email.accepts("@salone.it"));
    }

    #[test]
    fn first_invalid_follows_field_order() {
        let mut form = filled();
        form.email = "nope".into();
        form.city = "x".into();
        let v = validate(&form);
        assert_eq!(v.invalid, vec![Field::City, Field::Email]);
        assert_eq!(v.first_invalid(), Some(Field::City));
    }

    #[test]
    fn editing_clears_a_single_mark() {
        let mut v = validate(&ContactForm::default());
        v.clear(Field::Phone);
        assert!(!v.is_invalid(Field::Phone));
        assert!(v.is_invalid(Field::Email));
    }

    #[test]
    fn payload_uses_form_names() {
        let form = filled();
        let fields = form.fields();
        assert_eq!(fields[0], ("nome", "Giulia Rossi"));
        assert_eq!(fields[3], ("telefono", "+39 (051) 123-456"));
        assert_eq!(fields.len(), 6);
    }
}
