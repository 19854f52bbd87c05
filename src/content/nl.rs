use super::{
    AriaText, ConfirmationText, ContactText, FormText, LanguageText, LocalizedContent, NavigationText,
};

pub(super) static CONTENT: LocalizedContent = LocalizedContent {
    name: "Koert Manni",
    tagline: "AV-installaties op maat",
    description: "Maatwerk audio-visuele installaties die naadloos in elke omgeving opgaan.",
    navigation: NavigationText {
        home: "Home",
        contact: "Contact",
    },
    aria: AriaText {
        header_button: "Navigatie openen of sluiten",
        nav: "Hoofdnavigatie",
        close_navigation: "Navigatie sluiten",
        return_home: "Terug naar de homepage",
    },
    language: LanguageText { label: "Taal:" },
    contact: ContactText {
        heading: "Neem contact op",
        intro: "Deel je projectdoelen en Koert neemt contact op met een passend AV-plan.",
        footnote: "Liever mailen? Gebruik",
        form: FormText {
            name_label: "Volledige naam",
            name_placeholder: "Naam",
            email_label: "E-mailadres",
            email_placeholder: "naam@voorbeeld.nl",
            category_label: "Categorie",
            message_label: "Projectdetails",
            message_placeholder: "Beschrijf de ruimte, planning en specifieke AV-wensen.",
            submit: "Verstuur bericht",
            sending: "Verzenden...",
            success: "Bericht verzonden! Even geduld...",
            error_request: "Versturen mislukt. Probeer het opnieuw.",
            error_unknown: "Er ging iets mis tijdens het versturen. Probeer het opnieuw.",
        },
    },
    confirmation: ConfirmationText {
        heading: "Bericht verzonden",
        body: "Bedankt voor je bericht. Koert neemt snel contact met je op.",
        countdown_prefix: "Je gaat terug naar het contactformulier over",
        countdown_suffix: "seconden…",
        back_link: "Terug naar contact",
    },
};
