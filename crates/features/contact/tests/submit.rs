use folio_contact::{CONFIRMATION, ContactDesk, FieldError, Submission, validate};
use folio_domain::contact::{ContactForm, Fields};
use folio_kernel::HostError;
use folio_kernel::host::Browser;
use std::cell::RefCell;

#[derive(Debug, Default)]
struct RecordingBrowser {
    visited: RefCell<Vec<String>>,
    notices: RefCell<Vec<String>>,
    refuse: bool,
}

impl Browser for RecordingBrowser {
    fn navigate(&self, url: &str) -> Result<(), HostError> {
        if self.refuse {
            return Err(HostError::Rejected { message: "blocked".into(), context: None });
        }
        self.visited.borrow_mut().push(url.to_owned());
        Ok(())
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_owned());
    }

    fn download(&self, _href: &str, _filename: &str) -> Result<(), HostError> {
        Ok(())
    }
}

fn filled() -> ContactForm {
    ContactForm {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Project & collaboration".to_owned(),
        message: "Hello there".to_owned(),
    }
}

#[test]
fn each_single_empty_field_yields_exactly_its_error() {
    let cases: [(fn(&mut ContactForm), Fields, FieldError); 4] = [
        (|f| f.name.clear(), Fields::NAME, FieldError::NameRequired),
        (|f| f.email.clear(), Fields::EMAIL, FieldError::EmailRequired),
        (|f| f.subject = "   ".to_owned(), Fields::SUBJECT, FieldError::SubjectRequired),
        (|f| f.message.clear(), Fields::MESSAGE, FieldError::MessageRequired),
    ];

    for (blank, field, expected) in cases {
        let browser = RecordingBrowser::default();
        let mut form = filled();
        blank(&mut form);

        let outcome = ContactDesk::new("me@example.com").submit(&mut form, &browser);

        let errors = outcome.errors();
        assert_eq!(errors.len(), 1, "{field:?}");
        assert_eq!(errors.get(field), Some(expected));
        assert!(browser.visited.borrow().is_empty(), "no navigation for {field:?}");
        assert!(browser.notices.borrow().is_empty());
    }
}

#[test]
fn all_fields_are_checked_together() {
    let errors = validate(&ContactForm::default()).expect_err("empty form");
    assert_eq!(errors.failed(), Fields::ALL);
    assert_eq!(errors.len(), 4);
}

#[test]
fn malformed_email_is_reported_separately_from_missing() {
    let mut form = filled();
    form.email = "a@b".to_owned();
    let errors = validate(&form).expect_err("no domain segment");
    assert_eq!(errors.get(Fields::EMAIL), Some(FieldError::EmailInvalid));

    form.email = "a@b.com".to_owned();
    assert!(validate(&form).is_ok());
}

#[test]
fn valid_form_opens_mail_client_resets_and_confirms() {
    let browser = RecordingBrowser::default();
    let mut form = filled();

    let outcome = ContactDesk::new("me@example.com").submit(&mut form, &browser);

    let Submission::Sent { link } = outcome else {
        panic!("expected the form to be sent");
    };
    assert_eq!(
        link,
        "mailto:me@example.com?subject=Project%20%26%20collaboration\
         &body=Name%3A%20Ada%20Lovelace%0AEmail%3A%20ada%40example.com%0A%0AMessage%3A%20Hello%20there"
    );
    assert_eq!(*browser.visited.borrow(), vec![link]);
    assert_eq!(*browser.notices.borrow(), vec![CONFIRMATION.to_owned()]);
    assert_eq!(form, ContactForm::default());
}

#[test]
fn refused_navigation_keeps_the_form() {
    let browser = RecordingBrowser { refuse: true, ..RecordingBrowser::default() };
    let mut form = filled();

    let outcome = ContactDesk::new("me@example.com").submit(&mut form, &browser);

    assert!(matches!(outcome, Submission::Failed(_)));
    assert!(outcome.errors().is_empty());
    assert_eq!(form, filled());
    assert!(browser.notices.borrow().is_empty());
}

#[test]
fn a_fixed_form_clears_previous_errors() {
    let browser = RecordingBrowser::default();
    let desk = ContactDesk::new("me@example.com");
    let mut form = filled();
    form.name.clear();

    assert_eq!(desk.submit(&mut form, &browser).errors().len(), 1);

    form.name = "Ada".to_owned();
    assert!(desk.submit(&mut form, &browser).errors().is_empty());
}
