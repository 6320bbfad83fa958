// src/models/notification.rs

//! Notification messages handed to the email transport.

use serde::Serialize;

use crate::models::CheckSummary;

/// A rendered email, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
}

impl EmailMessage {
    /// Result report for a checked round.
    pub fn check_result(summary: &CheckSummary) -> Self {
        let subject = if summary.has_winner() {
            format!(
                "[로또 당첨!] {}회 - {}장 당첨!",
                summary.round(),
                summary.winner_count()
            )
        } else {
            format!(
                "[로또 결과] {}회 - {}장 낙첨",
                summary.round(),
                summary.ticket_count()
            )
        };

        Self {
            subject,
            body: summary.email_body(),
        }
    }

    /// Failure report for an operation that did not complete.
    pub fn failure(operation: &str, error: &str) -> Self {
        Self {
            subject: format!("[로또 실패] {operation} - 확인이 필요합니다"),
            body: format!(
                "[{operation}] 작업 중 오류가 발생했습니다.\n\n\
                 오류 내용:\n{error}\n\n\
                 동행복권 사이트에 직접 로그인하여 상태를 확인해주세요.\n"
            ),
        }
    }
}
