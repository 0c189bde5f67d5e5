use kernel::mailer::MailMessage;
use kernel::model::{
    booking::{event::ActionBooking, BookingStatus},
    complaint::Complaint,
};

fn status_color(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Approved => "#2ecc71",
        BookingStatus::Cancelled => "#e74c3c",
        BookingStatus::Pending => "#f39c12",
    }
}

/// Status notification sent after a booking is actioned.
pub fn booking_status_mail(item: &ActionBooking) -> MailMessage {
    let status = item.status;
    let reason_block = if status == BookingStatus::Cancelled && !item.cancellation_reason.is_empty()
    {
        format!(
            r#"<div style="background:#fff2f2;border-left:4px solid #e74c3c;padding:16px;margin:16px 0;">
              <b style="color:#e74c3c;">Cancellation Reason</b>
              <p>{}</p>
            </div>"#,
            item.cancellation_reason
        )
    } else {
        String::new()
    };

    let html = format!(
        r#"<div style="max-width:600px;margin:auto;font-family:Arial,sans-serif;">
          <div style="background:#34495e;color:#fff;text-align:center;padding:24px;">
            <div style="font-size:22px;font-weight:700;">Facility Booking</div>
          </div>
          <div style="padding:24px;">
            <p>Dear <b>{fullname}</b>,<br>We are writing to update you about your booking request.</p>
            <div style="text-align:center;margin:20px 0;">
              <span style="display:inline-block;padding:10px 22px;border-radius:24px;color:#fff;font-weight:600;background:{color};">{status}</span>
            </div>
            <div style="background:#f1f7ff;border-left:4px solid #3498db;padding:16px;">
              <b>Booking Details</b>
              <p>Facility: <b>{facility}</b><br>
                 Date: <b>{date}</b><br>
                 Time: <b>{start} - {end}</b><br>
                 Participants: <b>{participants}</b><br>
                 Purpose: <b>{purpose}</b></p>
            </div>
            {reason_block}
            <p style="color:#636e72;">Questions or concerns? Our admin team is here to help you.</p>
          </div>
        </div>"#,
        fullname = item.fullname,
        color = status_color(status),
        status = status,
        facility = item.facility,
        date = item.booking_date,
        start = item.start_time,
        end = item.end_time,
        participants = item
            .participants
            .map(|p| p.to_string())
            .unwrap_or_else(|| "N/A".into()),
        purpose = item.purpose.as_deref().unwrap_or("-"),
    );

    MailMessage::new(
        item.email.clone(),
        format!("Your Booking is {status}"),
        html,
    )
}

/// Heads-up to the admin inbox when a complaint is filed.
pub fn complaint_filed_mail(to: &str, complaint: &Complaint) -> MailMessage {
    let html = format!(
        r#"<p><b>From:</b> {name} ({email})</p>
           <p><b>Priority:</b> {priority}</p>
           <p><b>Message:</b><br>{message}</p>"#,
        name = complaint.user.name.as_deref().unwrap_or("—"),
        email = complaint.user.email.as_deref().unwrap_or("—"),
        priority = complaint.priority,
        message = complaint.message,
    );

    MailMessage::new(
        to.to_string(),
        format!(
            "New Complaint: {} [{}]",
            complaint.subject, complaint.priority
        ),
        html,
    )
}

/// Admin reply to a complainant, quoting the original message.
pub fn complaint_reply_mail(
    to: &str,
    subject: &str,
    message: &str,
    complaint: &Complaint,
) -> MailMessage {
    let html = format!(
        r#"<div style="font-family:Arial,sans-serif">
          <p>{reply}</p>
          <hr>
          <p style="color:#555"><b>Re:</b> {original_subject}</p>
          <blockquote style="color:#555">{original_message}</blockquote>
        </div>"#,
        reply = message.replace('\n', "<br>"),
        original_subject = complaint.subject,
        original_message = complaint.message.replace('\n', "<br>"),
    );

    MailMessage::new(to.to_string(), subject.to_string(), html)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use kernel::model::{
        booking::OwnerIdentity,
        complaint::{
            ComplaintContext, ComplaintPriority, ComplaintStatus, ComplaintSubject, ComplaintUser,
        },
        id::ComplaintId,
    };

    use super::*;

    fn action_item(status: BookingStatus, reason: &str) -> ActionBooking {
        ActionBooking {
            booking_id: None,
            fullname: "Jamie Lee".into(),
            email: "jamie@example.com".into(),
            phone: "555-0100".into(),
            faculty_dept: None,
            facility: "Lab1".into(),
            booking_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            start_time: "9.00".into(),
            end_time: "10.00".into(),
            participants: Some(12),
            purpose: Some("Workshop".into()),
            description: None,
            terms: Some(true),
            status,
            cancellation_reason: reason.into(),
            owner: OwnerIdentity::default(),
        }
    }

    fn complaint() -> Complaint {
        Complaint {
            complaint_id: ComplaintId::new(),
            subject: ComplaintSubject::FacilityProblem,
            message: "Projector is broken.\nSecond line.".into(),
            priority: ComplaintPriority::High,
            status: ComplaintStatus::Open,
            is_read: false,
            read_at: None,
            user: ComplaintUser {
                id: None,
                email: Some("user@example.com".into()),
                name: Some("Sam".into()),
                role: None,
            },
            context: ComplaintContext::default(),
            replies: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn cancelled_mail_carries_the_reason() {
        let mail = booking_status_mail(&action_item(BookingStatus::Cancelled, "Conflict"));
        assert_eq!(mail.subject, "Your Booking is Cancelled");
        assert!(mail.html.contains("Cancellation Reason"));
        assert!(mail.html.contains("Conflict"));
        assert!(mail.html.contains("#e74c3c"));
    }

    #[test]
    fn approved_mail_has_no_reason_block() {
        let mail = booking_status_mail(&action_item(BookingStatus::Approved, ""));
        assert_eq!(mail.subject, "Your Booking is Approved");
        assert!(!mail.html.contains("Cancellation Reason"));
        assert!(mail.html.contains("#2ecc71"));
        assert!(mail.html.contains("Lab1"));
    }

    #[test]
    fn filed_mail_addresses_the_admin_inbox() {
        let mail = complaint_filed_mail("admin@facilities.local", &complaint());
        assert_eq!(mail.to, "admin@facilities.local");
        assert_eq!(mail.subject, "New Complaint: facility-problem [high]");
        assert!(mail.html.contains("Sam"));
    }

    #[test]
    fn reply_mail_quotes_the_original() {
        let mail = complaint_reply_mail(
            "user@example.com",
            "About your complaint",
            "We fixed it.\nThanks.",
            &complaint(),
        );
        assert!(mail.html.contains("We fixed it.<br>Thanks."));
        assert!(mail.html.contains("Projector is broken.<br>Second line."));
        assert!(mail.html.contains("facility-problem"));
    }
}
