use super::layout::page;
use crate::dto::output;
use maud::{html, Markup};

pub fn index(error: Option<&str>) -> Markup {
    page(
        "New ticket",
        html! {
            h1 { "Get your ticket" }
            @if let Some(error) = error {
                p class="error" { (error) }
            }
            form method="post" action="/" {
                label { "First name " input type="text" name="f_name" required; }
                br;
                label { "Last name " input type="text" name="l_name" required; }
                br;
                label { "Date of birth " input type="date" name="dob" required; }
                br;
                label { "Phone number " input type="tel" name="phone_number" maxlength="10" required; }
                br;
                button type="submit" { "Submit" }
            }
        },
    )
}

pub fn success(ticket: &output::IssuedTicket) -> Markup {
    page(
        "Ticket issued",
        html! {
            h1 { "Your ticket is ready" }
            p { "Ticket ID: " strong { (ticket.ticket_id) } }
            img src=(ticket.qr_code_url) alt={ "QR code of ticket " (ticket.ticket_id) };
            p { "Scan the code or open " a href=(ticket.verification_url) { (ticket.verification_url) } " at the entrance." }
            p { a href={ "/pdf/" (ticket.ticket_id) } { "Download PDF" } }
        },
    )
}

pub fn verified(ticket: &output::Ticket) -> Markup {
    page(
        "Ticket verified",
        html! {
            h1 { "Ticket verified" }
            dl {
                dt { "Ticket ID" } dd { (ticket.ticket_id) }
                dt { "Name" } dd { (ticket.first_name) " " (ticket.last_name) }
                dt { "Date of birth" } dd { (ticket.date_of_birth) }
                dt { "Phone number" } dd { (ticket.phone_number) }
                dt { "Used" } dd { (ticket.used) }
            }
        },
    )
}

pub fn used(ticket_id: &str) -> Markup {
    page(
        "Ticket already used",
        html! {
            h1 { "Ticket already used" }
            p { "Ticket " strong { (ticket_id) } " has already been used." }
        },
    )
}

pub fn error(message: &str) -> Markup {
    page(
        "Error",
        html! {
            h1 { "Error" }
            p class="error" { (message) }
        },
    )
}

pub fn tickets(tickets: &[output::Ticket]) -> Markup {
    page(
        "Tickets",
        html! {
            h1 { "Tickets" }
            @if tickets.is_empty() {
                p { "No tickets issued yet." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "Ticket ID" }
                            th { "First name" }
                            th { "Last name" }
                            th { "Date of birth" }
                            th { "Phone number" }
                            th { "Used" }
                            th { "Issued on" }
                        }
                    }
                    tbody {
                        @for ticket in tickets {
                            tr {
                                td { (ticket.ticket_id) }
                                td { (ticket.first_name) }
                                td { (ticket.last_name) }
                                td { (ticket.date_of_birth) }
                                td { (ticket.phone_number) }
                                td { @if ticket.used { "yes" } @else { "no" } }
                                td { (ticket.issued_at.date()) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn about() -> Markup {
    page(
        "About",
        html! {
            h1 { "About" }
            p {
                "Fill in the form to receive a ticket with a QR code. "
                "The code links to a verification page that accepts every ticket exactly once."
            }
        },
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use time::{macros::date, OffsetDateTime};

    #[test]
    fn index_renders_error_escaped() {
        let markup = index(Some("<b>bad</b>")).into_string();

        assert!(markup.contains("&lt;b&gt;bad&lt;/b&gt;"));
    }

    #[test]
    fn index_without_error() {
        let markup = index(None).into_string();

        assert!(markup.contains(r#"name="phone_number""#));
        assert!(!markup.contains(r#"class="error""#));
    }

    #[test]
    fn verified_contains_ticket_fields() {
        let ticket = output::Ticket {
            ticket_id: "0123456789".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
            date_of_birth: date!(1990 - 05 - 01),
            phone_number: "5551234567".to_string(),
            used: true,
            issued_at: OffsetDateTime::now_utc(),
            used_at: Some(OffsetDateTime::now_utc()),
        };

        let markup = verified(&ticket).into_string();

        assert!(markup.contains("0123456789"));
        assert!(markup.contains("Ana Ruiz"));
        assert!(markup.contains("1990-05-01"));
        assert!(markup.contains("5551234567"));
    }

    #[test]
    fn tickets_empty() {
        let markup = tickets(&[]).into_string();

        assert!(markup.contains("No tickets issued yet."));
    }
}
