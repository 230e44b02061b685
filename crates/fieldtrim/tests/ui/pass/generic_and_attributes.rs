use fieldtrim::{Trimmable, prelude::*};

#[derive(Trimmable)]
#[trim(name = "Contact")]
struct ContactRecord<T> {
    #[trim(rename = "DisplayName")]
    display_name: String,
    #[trim(skip)]
    raw: String,
    email: Option<std::string::String>,
    payload: T,
}

fn main() {
    let mut record = ContactRecord {
        display_name: " Leia ".to_string(),
        raw: " untouched ".to_string(),
        email: Some(" leia@alderaan.example ".to_string()),
        payload: 42_u8,
    };

    trim_all_members(&mut record).unwrap();

    assert_eq!(record.display_name, "Leia");
    assert_eq!(record.raw, " untouched ");
    assert_eq!(record.email.as_deref(), Some("leia@alderaan.example"));
    assert_eq!(record.payload, 42);

    let model = <ContactRecord<u8> as Trimmable>::MODEL;
    assert_eq!(model.name, "Contact");
    assert_eq!(model.len(), 3);
}
