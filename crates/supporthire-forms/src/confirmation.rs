//! The confirmation view shown after a recorded submission.
//!
//! The view reads a single `type` query parameter and picks one of three
//! fixed message sets. It holds no state.

use ironhtml::typed::Element;
use ironhtml_elements::{Div, A, H1, H2, P};

use crate::record::SubmissionKind;

/// Which message set to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationKind {
    /// `type=job-seeker`
    JobSeeker,
    /// `type=recruiter`
    Recruiter,
    /// Missing or unrecognised `type`.
    Generic,
}

impl ConfirmationKind {
    /// Picks the message set for a `type` query value.
    pub fn from_query_value(value: Option<&str>) -> Self {
        match value.and_then(SubmissionKind::parse) {
            Some(kind) => kind.into(),
            None => Self::Generic,
        }
    }

    /// Picks the message set for a path such as `/success?type=recruiter`.
    ///
    /// Keys and values are URL-decoded (`%XX` escapes, `+` as space). Only
    /// the first `type` parameter counts.
    pub fn from_path(path: &str) -> Self {
        let query = path.split_once('?').map_or("", |(_, query)| query);
        let query = query.split_once('#').map_or(query, |(query, _)| query);
        let value = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .map(|(key, value)| (decode_query_component(key), decode_query_component(value)))
            .find(|(key, _)| key == "type")
            .map(|(_, value)| value);
        Self::from_query_value(value.as_deref())
    }

    /// Returns the fixed copy for this kind.
    pub fn content(self) -> &'static ConfirmationContent {
        match self {
            Self::JobSeeker => &JOB_SEEKER,
            Self::Recruiter => &RECRUITER,
            Self::Generic => &GENERIC,
        }
    }
}

/// Decodes one `application/x-www-form-urlencoded` key or value.
///
/// Malformed escapes are kept as typed; invalid UTF-8 is replaced.
fn decode_query_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => decoded.push(b' '),
            b'%' => {
                let byte = s
                    .get(i + 1..i + 3)
                    .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                if let Some(byte) = byte {
                    decoded.push(byte);
                    i += 3;
                    continue;
                }
                decoded.push(b'%');
            }
            other => decoded.push(other),
        }
        i += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

impl From<SubmissionKind> for ConfirmationKind {
    fn from(kind: SubmissionKind) -> Self {
        match kind {
            SubmissionKind::JobSeeker => Self::JobSeeker,
            SubmissionKind::Recruiter => Self::Recruiter,
        }
    }
}

/// A link inviting the visitor to the other form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossLink {
    /// Anchor of the other form on the landing page.
    pub href: &'static str,
    /// Link text.
    pub label: &'static str,
}

/// Copy of one confirmation message set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationContent {
    /// Page heading.
    pub title: &'static str,
    /// Lead paragraph under the heading.
    pub message: &'static str,
    /// Body of the "What happens next?" box.
    pub next_steps: &'static str,
    /// Invitation to the other form, if any.
    pub cross_link: Option<CrossLink>,
}

static JOB_SEEKER: ConfirmationContent = ConfirmationContent {
    title: "Application Submitted Successfully!",
    message: "We've received your details and will notify you when we launch in your city. \
              Keep an eye on your phone for updates!",
    next_steps: "We're currently in the validation phase. Once we have enough interest in \
                 your city, we'll start onboarding verified recruiters and notify you about \
                 relevant job openings.",
    cross_link: Some(CrossLink {
        href: "/#recruiters",
        label: "Are you hiring?",
    }),
};

static RECRUITER: ConfirmationContent = ConfirmationContent {
    title: "Thank You for Your Interest!",
    message: "We've received your hiring requirements and will reach out soon to understand \
              your needs better. We're excited to help you find the right talent!",
    next_steps: "Our team will review your requirements and reach out to discuss how we can \
                 help you find quality candidates for your support roles. We're building a \
                 platform specifically for BPO, KPO, and call center hiring.",
    cross_link: Some(CrossLink {
        href: "/#job-seekers",
        label: "Looking for a job?",
    }),
};

static GENERIC: ConfirmationContent = ConfirmationContent {
    title: "Submission Successful!",
    message: "We've received your submission successfully.",
    next_steps: "We'll review your submission and get back to you soon with next steps.",
    cross_link: None,
};

/// Renderable confirmation view.
#[derive(Debug, Clone)]
pub struct ConfirmationPage {
    kind: ConfirmationKind,
    contact_email: Option<String>,
}

impl ConfirmationPage {
    /// Creates a page for the given message set.
    pub fn new(kind: ConfirmationKind) -> Self {
        Self {
            kind,
            contact_email: None,
        }
    }

    /// Creates a page for the path the form navigated to.
    pub fn for_path(path: &str) -> Self {
        Self::new(ConfirmationKind::from_path(path))
    }

    /// Adds a "Questions? Reach us at" line.
    #[must_use]
    pub fn contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = Some(email.into());
        self
    }

    /// Returns the message set shown by this page.
    pub fn kind(&self) -> ConfirmationKind {
        self.kind
    }

    /// Renders the view as an HTML fragment.
    pub fn render(&self) -> String {
        let content = self.kind.content();

        let page = Element::<Div>::new()
            .class("confirmation text-center")
            .child::<H1, _>(|h| h.class("confirmation-title").text(content.title))
            .child::<P, _>(|p| p.class("lead").text(content.message))
            .child::<Div, _>(|d| {
                d.class("confirmation-next")
                    .child::<H2, _>(|h| h.text("What happens next?"))
                    .child::<P, _>(|p| p.text(content.next_steps))
            })
            .child::<Div, _>(|d| {
                let d = d.class("confirmation-actions").child::<A, _>(|a| {
                    a.attr("href", "/")
                        .class("btn btn-primary")
                        .text("Back to Home")
                });
                match content.cross_link {
                    Some(link) => d.child::<A, _>(|a| {
                        a.attr("href", link.href)
                            .class("btn btn-outline-primary")
                            .text(link.label)
                    }),
                    None => d,
                }
            });

        match &self.contact_email {
            Some(email) => {
                let mailto = format!("mailto:{email}");
                page.child::<P, _>(|p| {
                    p.class("confirmation-contact")
                        .text("Questions? Reach us at ")
                        .child::<A, _>(|a| a.attr("href", &mailto).text(email))
                })
                .render()
            }
            None => page.render(),
        }
    }
}
