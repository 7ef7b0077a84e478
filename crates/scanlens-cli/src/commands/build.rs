use crate::cli::BuildCommand;
use crate::formatters::text::describe_barcode_reason;
use anyhow::Result;
use colored::Colorize;
use scanlens_core::model::{EmailRecord, SmsRecord, TelRecord, VCardRecord};
use scanlens_core::{validate_barcode, GenerationPayload, WifiRecord};

/// Prints the encoded payload. Returns true when it fails `symbology` validation.
pub fn build(command: &BuildCommand, symbology: Option<&str>) -> Result<bool> {
    let content = to_payload(command).build();

    let Some(symbology) = symbology else {
        println!("{content}");
        return Ok(false);
    };

    match validate_barcode(symbology, &content) {
        Ok(value) => {
            println!("{value}");
            Ok(false)
        }
        Err(reason) => {
            eprintln!(
                "{} cannot encode as {}: {}",
                "✘".red(),
                symbology,
                describe_barcode_reason(reason)
            );
            Ok(true)
        }
    }
}

fn to_payload(command: &BuildCommand) -> GenerationPayload {
    match command {
        BuildCommand::Wifi {
            ssid,
            password,
            security,
            hidden,
        } => GenerationPayload::Wifi(WifiRecord {
            ssid: ssid.clone(),
            password: password.clone(),
            security: (*security).into(),
            hidden: *hidden,
        }),
        BuildCommand::Tel { number } => GenerationPayload::Tel(TelRecord {
            number: number.clone(),
        }),
        BuildCommand::Email { to, subject, body } => GenerationPayload::Email(EmailRecord {
            to: to.clone(),
            subject: subject.clone(),
            body: body.clone(),
        }),
        BuildCommand::Sms { number, body } => GenerationPayload::Sms(SmsRecord {
            number: number.clone(),
            body: body.clone(),
        }),
        BuildCommand::Vcard {
            name,
            tel,
            email,
            org,
            title,
            adr,
            url,
        } => GenerationPayload::Vcard(VCardRecord {
            full_name: name.clone(),
            n: None,
            tel: tel.clone(),
            email: email.clone(),
            org: org.clone(),
            title: title.clone(),
            adr: adr.clone(),
            url: url.clone(),
        }),
        BuildCommand::Url { value } => GenerationPayload::Url {
            value: value.clone(),
        },
        BuildCommand::Text { value } => GenerationPayload::Text {
            value: value.clone(),
        },
    }
}
