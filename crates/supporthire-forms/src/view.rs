//! HTML views of the two forms.
//!
//! Each view renders the current draft, the field errors, the aggregate
//! submit error and the submit button exactly as the controller reports
//! them. Markup uses Bootstrap 5 classes.

use ironhtml::typed::Element;
use ironhtml_elements::{Button, Div, Form, Input, Label, Option_, Section, Select, H2, P};

use crate::fields::{Choice, FormField, HiringRole, WillingToPay};
use crate::job_seeker::{JobSeekerField, JobSeekerForm};
use crate::recruiter::{RecruiterField, RecruiterForm};

/// A labelled single-line input.
struct TextInput<'a> {
    id: &'static str,
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: &'a str,
    error: Option<&'a str>,
}

/// A labelled drop-down with a disabled placeholder option.
struct Dropdown<'a, C: Choice> {
    id: &'static str,
    name: &'static str,
    label: &'static str,
    blank_label: &'static str,
    selected: Option<C>,
    error: Option<&'a str>,
}

/// Status of the submit control.
struct SubmitControls<'a> {
    error: Option<&'a str>,
    label: &'static str,
    disabled: bool,
}

fn field_error(wrapper: Element<Div>, error: Option<&str>) -> Element<Div> {
    match error {
        Some(message) => {
            wrapper.child::<Div, _>(|d| d.class("invalid-feedback d-block").text(message))
        }
        None => wrapper,
    }
}

fn text_input(form: Element<Form>, input: &TextInput<'_>) -> Element<Form> {
    form.child::<Div, _>(|d| {
        let d = d
            .class("mb-3")
            .child::<Label, _>(|l| l.attr("for", input.id).class("form-label").text(input.label))
            .child::<Input, _>(|i| {
                i.attr("type", input.input_type)
                    .id(input.id)
                    .attr("name", input.name)
                    .class("form-control")
                    .when(input.error.is_some(), |i| i.class("is-invalid"))
                    .attr("value", input.value)
                    .attr("placeholder", input.placeholder)
                    .bool_attr("required")
            });
        field_error(d, input.error)
    })
}

fn dropdown<C: Choice>(form: Element<Form>, dropdown: &Dropdown<'_, C>) -> Element<Form> {
    let selected = dropdown.selected.map(Choice::value);
    form.child::<Div, _>(|d| {
        let d = d
            .class("mb-3")
            .child::<Label, _>(|l| {
                l.attr("for", dropdown.id)
                    .class("form-label")
                    .text(dropdown.label)
            })
            .child::<Select, _>(|s| {
                s.id(dropdown.id)
                    .attr("name", dropdown.name)
                    .class("form-select")
                    .when(dropdown.error.is_some(), |s| s.class("is-invalid"))
                    .bool_attr("required")
                    .child::<Option_, _>(|o| {
                        o.attr("value", "")
                            .bool_attr("disabled")
                            .when(selected.is_none(), |o| o.bool_attr("selected"))
                            .text(dropdown.blank_label)
                    })
                    .children::<Option_, _, _>(C::options(), |(value, label), o| {
                        o.attr("value", value)
                            .when(selected == Some(value), |o| o.bool_attr("selected"))
                            .text(label)
                    })
            });
        field_error(d, dropdown.error)
    })
}

/// Renders one pressed/unpressed button per option.
fn toggle_group<C: Choice>(
    form: Element<Form>,
    name: &'static str,
    label: &'static str,
    is_selected: impl Fn(C) -> bool,
    error: Option<&str>,
) -> Element<Form> {
    form.child::<Div, _>(|d| {
        let d = d
            .class("mb-3")
            .child::<Label, _>(|l| l.class("form-label").text(label))
            .child::<Div, _>(|g| {
                g.class("d-flex flex-wrap gap-2")
                    .attr("role", "group")
                    .children::<Button, _, _>(C::ALL.iter().copied(), |choice, b| {
                        let pressed = is_selected(choice);
                        b.attr("type", "button")
                            .attr("name", name)
                            .attr("value", choice.value())
                            .class("btn btn-sm rounded-pill")
                            .class(if pressed {
                                "btn-primary active"
                            } else {
                                "btn-outline-secondary"
                            })
                            .attr("aria-pressed", if pressed { "true" } else { "false" })
                            .text(choice.label())
                    })
            });
        field_error(d, error)
    })
}

fn submit_controls(form: Element<Form>, controls: &SubmitControls<'_>) -> Element<Form> {
    let form = match controls.error {
        Some(message) => form.child::<P, _>(|p| {
            p.class("text-danger small submit-error")
                .attr("role", "alert")
                .text(message)
        }),
        None => form,
    };
    form.child::<Button, _>(|b| {
        b.attr("type", "submit")
            .class("btn btn-primary w-100 mt-2")
            .when(controls.disabled, |b| b.bool_attr("disabled"))
            .text(controls.label)
    })
}

fn section(
    id: &'static str,
    title: &'static str,
    intro: &'static str,
    footnote: Option<&'static str>,
    form: Element<Form>,
) -> String {
    let heading_id = format!("{id}-heading");
    let section = Element::<Section>::new()
        .id(id)
        .attr("aria-labelledby", heading_id.as_str())
        .class("card p-4 lead-form")
        .child::<H2, _>(|h| h.id(heading_id.as_str()).class("h5").text(title))
        .child::<P, _>(|p| p.class("text-muted small").text(intro))
        .child::<Form, _>(|_| form);
    match footnote {
        Some(text) => section
            .child::<P, _>(|p| p.class("text-muted small mt-1").text(text))
            .render(),
        None => section.render(),
    }
}

fn new_form() -> Element<Form> {
    Element::<Form>::new()
        .attr("method", "post")
        .bool_attr("novalidate")
}

impl JobSeekerForm {
    /// Renders the form with its current values and messages.
    pub fn render(&self) -> String {
        let draft = self.draft();
        let errors = self.errors();

        let form = text_input(
            new_form(),
            &TextInput {
                id: "js-name",
                name: JobSeekerField::Name.name(),
                label: "Full Name",
                input_type: "text",
                placeholder: "Priya Sharma",
                value: &draft.name,
                error: errors.get(JobSeekerField::Name),
            },
        );
        let form = text_input(
            form,
            &TextInput {
                id: "js-phone",
                name: JobSeekerField::Phone.name(),
                label: "Phone Number",
                input_type: "tel",
                placeholder: "+91 ...",
                value: &draft.phone,
                error: errors.get(JobSeekerField::Phone),
            },
        );
        let form = text_input(
            form,
            &TextInput {
                id: "js-city",
                name: JobSeekerField::City.name(),
                label: "City",
                input_type: "text",
                placeholder: "Bengaluru, Pune, Gurgaon...",
                value: &draft.city,
                error: errors.get(JobSeekerField::City),
            },
        );
        let form = dropdown(
            form,
            &Dropdown {
                id: "js-job-type",
                name: JobSeekerField::JobType.name(),
                label: "Job Type",
                blank_label: "Select job type",
                selected: draft.job_type,
                error: errors.get(JobSeekerField::JobType),
            },
        );
        let form = dropdown(
            form,
            &Dropdown {
                id: "js-shift",
                name: JobSeekerField::Shift.name(),
                label: "Shift Preference",
                blank_label: "Select shift",
                selected: draft.shift,
                error: errors.get(JobSeekerField::Shift),
            },
        );
        let form = submit_controls(
            form,
            &SubmitControls {
                error: self.submit_error(),
                label: self.submit_label(),
                disabled: self.is_submitting(),
            },
        );

        section(
            "job-seekers",
            "Looking for a Support Job?",
            "Share a few details and we'll notify you when relevant roles go live.",
            Some("We'll only use this to understand demand and share updates when we launch."),
            form,
        )
    }
}

impl RecruiterForm {
    /// Renders the form with its current values and messages.
    pub fn render(&self) -> String {
        let draft = self.draft();
        let errors = self.errors();

        let form = text_input(
            new_form(),
            &TextInput {
                id: "rec-company",
                name: RecruiterField::CompanyName.name(),
                label: "Company Name",
                input_type: "text",
                placeholder: "ABC BPO Pvt. Ltd.",
                value: &draft.company_name,
                error: errors.get(RecruiterField::CompanyName),
            },
        );
        let form = text_input(
            form,
            &TextInput {
                id: "rec-name",
                name: RecruiterField::RecruiterName.name(),
                label: "Recruiter Name",
                input_type: "text",
                placeholder: "Hiring Manager / Recruiter",
                value: &draft.recruiter_name,
                error: errors.get(RecruiterField::RecruiterName),
            },
        );
        let form = text_input(
            form,
            &TextInput {
                id: "rec-phone",
                name: RecruiterField::Phone.name(),
                label: "Phone Number",
                input_type: "tel",
                placeholder: "+91 ...",
                value: &draft.phone,
                error: errors.get(RecruiterField::Phone),
            },
        );
        let form = toggle_group(
            form,
            RecruiterField::HiringRoles.name(),
            "Hiring Roles (select all that apply)",
            |role: HiringRole| self.is_role_selected(role),
            errors.get(RecruiterField::HiringRoles),
        );
        let form = dropdown(
            form,
            &Dropdown {
                id: "rec-volume",
                name: RecruiterField::MonthlyVolume.name(),
                label: "Monthly Hiring Volume",
                blank_label: "Select volume",
                selected: draft.monthly_volume,
                error: errors.get(RecruiterField::MonthlyVolume),
            },
        );
        let form = toggle_group(
            form,
            RecruiterField::WillingToPay.name(),
            "Would you pay for quality candidates?",
            |answer: WillingToPay| draft.willing_to_pay == Some(answer),
            errors.get(RecruiterField::WillingToPay),
        );
        let form = submit_controls(
            form,
            &SubmitControls {
                error: self.submit_error(),
                label: self.submit_label(),
                disabled: self.is_submitting(),
            },
        );

        section(
            "recruiters",
            "Hiring Support Staff?",
            "Share your hiring pattern to help us design the platform for recruiters like you.",
            None,
            form,
        )
    }
}
