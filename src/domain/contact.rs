//! Contact form model.
//!
//! A [`ContactForm`] holds the raw field values as read from the page. Turning
//! it into an [`Enquiry`] trims every field and requires name, email and
//! message to be non-empty; the category falls back to the first entry of
//! [`CONTACT_CATEGORIES`].

/// Address the site owner receives enquiries on.
pub const CONTACT_EMAIL: &str = "koert@avinstallatie.nl";

/// Enquiry categories offered by the form. The first one is preselected.
pub const CONTACT_CATEGORIES: [&str; 5] = [
    "Residential project",
    "Corporate / commercial",
    "Event or venue",
    "System support",
    "General enquiry",
];

/// A required contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    FullName,
    Email,
    Message,
}

/// Raw contact form values, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub category: String,
    pub message: String,
}

/// A validated enquiry ready to be relayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enquiry {
    pub full_name: String,
    pub reply_to: String,
    pub category: String,
    pub message: String,
}

impl ContactForm {
    /// Trims the fields and checks the required ones.
    ///
    /// # Errors
    ///
    /// Returns every required field that is empty after trimming, in form order.
    ///
    /// ```
    /// use avsite::domain::{ContactField, ContactForm};
    ///
    /// let form = ContactForm {
    ///     full_name: "  ".to_string(),
    ///     email: "jane@x.com".to_string(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     form.to_enquiry(),
    ///     Err(vec![ContactField::FullName, ContactField::Message])
    /// );
    /// ```
    pub fn to_enquiry(&self) -> Result<Enquiry, Vec<ContactField>> {
        let full_name = self.full_name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        let missing: Vec<ContactField> = [
            (ContactField::FullName, full_name),
            (ContactField::Email, email),
            (ContactField::Message, message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(missing);
        }

        let category = match self.category.trim() {
            "" => CONTACT_CATEGORIES[0],
            other => other,
        };

        Ok(Enquiry {
            full_name: full_name.to_string(),
            reply_to: email.to_string(),
            category: category.to_string(),
            message: message.to_string(),
        })
    }
}

impl Enquiry {
    /// Subject line of the relayed email.
    #[must_use]
    pub fn subject(&self) -> String {
        format!("AV enquiry ({}) from {}", self.category, self.full_name)
    }
}

/// Renders an address as `name [at] domain [dot] tld` for display on the page.
///
/// ```
/// use avsite::domain::obfuscate_email;
///
/// assert_eq!(
///     obfuscate_email("koert@avinstallatie.nl"),
///     "koert [at] avinstallatie [dot] nl"
/// );
/// ```
#[must_use]
pub fn obfuscate_email(address: &str) -> String {
    match address.split_once('@') {
        Some((local, domain)) => format!("{local} [at] {}", domain.replace('.', " [dot] ")),
        None => address.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            full_name: " Jane Doe ".to_string(),
            email: "jane@x.com\n".to_string(),
            category: "Event or venue".to_string(),
            message: "\tHello ".to_string(),
        }
    }

    #[test]
    fn trims_every_field() {
        let enquiry = filled().to_enquiry().unwrap();
        assert_eq!(enquiry.full_name, "Jane Doe");
        assert_eq!(enquiry.reply_to, "jane@x.com");
        assert_eq!(enquiry.message, "Hello");
        assert_eq!(enquiry.subject(), "AV enquiry (Event or venue) from Jane Doe");
    }

    #[test]
    fn blank_category_falls_back_to_first() {
        let form = ContactForm { category: "   ".to_string(), ..filled() };
        assert_eq!(form.to_enquiry().unwrap().category, "Residential project");
    }

    #[test]
    fn each_required_field_is_checked() {
        for field in [ContactField::FullName, ContactField::Email, ContactField::Message] {
            let mut form = filled();
            match field {
                ContactField::FullName => form.full_name.clear(),
                ContactField::Email => form.email = "   ".to_string(),
                ContactField::Message => form.message.clear(),
            }
            assert_eq!(form.to_enquiry(), Err(vec![field]));
        }
    }

    #[test]
    fn obfuscation_leaves_invalid_addresses_alone() {
        assert_eq!(obfuscate_email("not-an-address"), "not-an-address");
    }
}
