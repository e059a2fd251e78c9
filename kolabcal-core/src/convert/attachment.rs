use crate::kcal;
use crate::kolab::{Attachment, AttachmentContent};

pub fn attachment_to_native(a: &Attachment) -> kcal::Attachment {
    let mut native = match &a.content {
        AttachmentContent::Uri(uri) => kcal::Attachment::from_uri(uri.as_str(), a.mimetype.as_str()),
        AttachmentContent::Data(data) => kcal::Attachment::from_binary(data.clone(), a.mimetype.as_str()),
    };
    if let Some(label) = &a.label {
        native.label = label.clone();
    }
    native
}

pub fn attachment_from_native(native: &kcal::Attachment) -> Attachment {
    let content = match &native.data {
        kcal::AttachmentData::Uri(uri) => AttachmentContent::Uri(uri.clone()),
        kcal::AttachmentData::Binary(data) => AttachmentContent::Data(data.clone()),
    };
    Attachment {
        content,
        mimetype: native.mime_type.clone(),
        label: (!native.label.is_empty()).then(|| native.label.clone()),
    }
}
