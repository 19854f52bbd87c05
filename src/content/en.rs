use super::{
    AriaText, ConfirmationText, ContactText, FormText, LanguageText, LocalizedContent, NavigationText,
};

pub(super) static CONTENT: LocalizedContent = LocalizedContent {
    name: "Koert Manni",
    tagline: "Tailored AV Installations",
    description: "Tailored audio-visual installations that blend seamlessly with every environment.",
    navigation: NavigationText {
        home: "Home",
        contact: "Contact",
    },
    aria: AriaText {
        header_button: "Toggle navigation",
        nav: "Primary navigation",
        close_navigation: "Close navigation",
        return_home: "Return to homepage",
    },
    language: LanguageText { label: "Language:" },
    contact: ContactText {
        heading: "Get in touch with Koert",
        intro: "Share your project goals and Koert will respond with a tailored AV plan.",
        footnote: "Prefer to email? Use",
        form: FormText {
            name_label: "Full name",
            name_placeholder: "Your full name",
            email_label: "Email address",
            email_placeholder: "name@example.com",
            category_label: "Category",
            message_label: "Project details",
            message_placeholder: "Tell Koert about the space, timeline, and AV requirements.",
            submit: "Send message",
            sending: "Sending...",
            success: "Message sent! Redirecting...",
            error_request: "Failed to send message. Please try again.",
            error_unknown: "Something went wrong while sending. Please try again.",
        },
    },
    confirmation: ConfirmationText {
        heading: "Message sent",
        body: "Thanks for reaching out. Koert will get back to you shortly.",
        countdown_prefix: "Returning to the contact form in",
        countdown_suffix: "seconds…",
        back_link: "Back to contact",
    },
};
