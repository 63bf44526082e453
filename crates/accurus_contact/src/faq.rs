// --- File: crates/accurus_contact/src/faq.rs ---
//! Frequently asked questions shown under the contact form.

use crate::error::ContactError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqItem] = &[
    FaqItem {
        question: "What services do you offer?",
        answer: "We provide a complete suite of solutions to streamline your clinic’s administrative tasks, including Medical Billing & Claims Submission, Medical Coding (ICD-10, CPT), Prior Authorization & Insurance Verification, Virtual Medical Scribing, Medical Transcription, and Physician Credentialing.",
    },
    FaqItem {
        question: "How long does it take to process claims?",
        answer: "We typically process claims within 24-48 hours of receipt, ensuring quick turnaround times for our clients.",
    },
    FaqItem {
        question: "Do you work with all private insurance providers?",
        answer: "Yes, we work with all major private insurance providers in Canada, as well as provincial health insurance plans.",
    },
    FaqItem {
        question: "What billing software do you integrate with?",
        answer: "We integrate with popular EMR/EHR systems including OSCAR, Telus Health, ClinicAid, and Medesync, among others.",
    },
    FaqItem {
        question: "How do you ensure accurate and timely claim submissions?",
        answer: "Our process auto-captures charges directly from your EHR/EMR and scrubs errors in real time. We submit claims within 4 hours using payer-specific rules, track payments daily, and handle appeals for denials and underpayments on your behalf.",
    },
    FaqItem {
        question: "How do you maximize revenue through medical coding?",
        answer: "Our CPC-certified coders review charts to assign accurate codes that insurers pay for. We also perform dual-layer audit checks to prevent upcoding or downcoding, and we provide monthly reports that show the direct impact of our coding on your revenue.",
    },
    FaqItem {
        question: "What is your process for Prior Authorization & Insurance Verification?",
        answer: "We start by flagging treatments requiring prior authorization during scheduling. We then submit the necessary requests with clinical evidence on the same day, and if needed, escalate stalled requests directly to payer medical directors to minimize treatment delays.",
    },
    FaqItem {
        question: "How does Virtual Medical Scribing work?",
        answer: "Our HIPAA-trained virtual scribes join your patient visits—whether in-person or virtual—to document directly into your EHR using your preferred templates. They deliver complete notes for your review and sign-off within one hour, so your clinicians can focus on patient care.",
    },
    FaqItem {
        question: "What are the turnaround times for your Medical Transcription services?",
        answer: "We transcribe dictated notes via a secure app or call in under 4 hours. The transcriptions are then formatted to meet your specialty requirements (such as SOAP notes, H&Ps, or procedure summaries) and uploaded to your EHR with timestamps and provider signatures.",
    },
    FaqItem {
        question: "How do you manage Physician Credentialing?",
        answer: "We simplify the credentialing process by collecting all necessary documentation—licenses, malpractice history, and practice details—filing applications, tracking progress, and resolving any payer roadblocks. We also automate revalidation to ensure your providers remain continuously enrolled.",
    },
    FaqItem {
        question: "What makes your services unique compared to other providers?",
        answer: "We offer a unified, integrated approach that covers every aspect of your clinic’s administrative needs. Our processes are designed to reduce errors, speed up reimbursements, and minimize delays. With transparent reporting and dedicated support, we protect your revenue and save you valuable time—all at a cost-effective price point.",
    },
    FaqItem {
        question: "How can I get started?",
        answer: "It’s easy! Contact us today to schedule a free consultation. We’ll assess your clinic’s needs and tailor a solution that streamlines your administrative workflows and boosts your revenue cycle.",
    },
];

/// One rendered row of the accordion.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FaqEntryView {
    pub index: usize,
    pub question: String,
    /// Only present for the open entry.
    pub answer: Option<String>,
    pub open: bool,
}

/// Accordion state: at most one entry is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqPanel {
    items: &'static [FaqItem],
    open: Option<usize>,
}

impl Default for FaqPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl FaqPanel {
    /// All entries collapsed.
    pub fn new() -> Self {
        Self::with_items(FAQS)
    }

    pub fn with_items(items: &'static [FaqItem]) -> Self {
        Self { items, open: None }
    }

    /// A panel with `open` expanded, e.g. restored from a query parameter.
    pub fn with_open(open: Option<usize>) -> Result<Self, ContactError> {
        let mut panel = Self::new();
        if let Some(index) = open {
            panel.toggle(index)?;
        }
        Ok(panel)
    }

    pub fn items(&self) -> &'static [FaqItem] {
        self.items
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Collapses `index` if it is the open entry, otherwise opens it and
    /// collapses whichever entry was open. Returns the new open index.
    pub fn toggle(&mut self, index: usize) -> Result<Option<usize>, ContactError> {
        if index >= self.items.len() {
            return Err(ContactError::FaqIndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(self.open)
    }

    pub fn view(&self) -> Vec<FaqEntryView> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let open = self.open == Some(index);
                FaqEntryView {
                    index,
                    question: item.question.to_string(),
                    answer: open.then(|| item.answer.to_string()),
                    open,
                }
            })
            .collect()
    }
}
