// src/session/testing.rs
//! In-memory `Transport` for exercising the flow without a server.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::{Page, Transport};
use crate::error::{Result, ScrapeError};

pub const TEST_ROOT: &str = "http://pma.test/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl Recorded {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Replays queued replies in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<Page>>>,
    requests: RefCell<Vec<Recorded>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, body: &str) -> Self {
        self.reply_at(&format!("{}index.php", TEST_ROOT), body)
    }

    pub fn reply_at(self, final_url: &str, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(Page {
            status: 200,
            final_url: final_url.to_string(),
            body: body.to_string(),
        }));
        self
    }

    pub fn fail_status(self, status: u16) -> Self {
        self.replies.borrow_mut().push_back(Err(ScrapeError::Status {
            url: format!("{}index.php", TEST_ROOT),
            status,
        }));
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.replies.borrow().len()
    }

    fn next(&self, method: &'static str, path: &str, params: &[(&str, &str)]) -> Result<Page> {
        self.requests.borrow_mut().push(Recorded {
            method,
            path: path.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reply for {} {}", method, path))
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Page> {
        self.next("GET", path, query)
    }

    fn post(&self, path: &str, form: &[(&str, &str)]) -> Result<Page> {
        self.next("POST", path, form)
    }
}
