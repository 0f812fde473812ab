//! Mock platform and messaging services for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use qa_report::error::{Error, Result};
use qa_report::messaging::MessagingService;
use qa_report::platform::{PlatformService, PullRequestPage};
use qa_report::types::{PullRequestSummary, RepoConfig};
use std::collections::HashMap;
use std::sync::Mutex;

/// Call record for `post_message`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMessageCall {
    pub channel: String,
    pub text: String,
}

/// Simple mock platform service for testing
///
/// Features:
/// - Serves pre-built pages of PRs
/// - Records which pages were requested
/// - Error injection per page
pub struct MockPlatformService {
    config: RepoConfig,
    pages: Vec<Vec<PullRequestSummary>>,
    list_calls: Mutex<Vec<u32>>,
    error_on_page: Mutex<HashMap<u32, String>>,
}

impl MockPlatformService {
    /// Create a mock serving the given pages (page 1 first)
    pub fn with_pages(config: RepoConfig, pages: Vec<Vec<PullRequestSummary>>) -> Self {
        Self {
            config,
            pages,
            list_calls: Mutex::new(Vec::new()),
            error_on_page: Mutex::new(HashMap::new()),
        }
    }

    /// Create a mock serving PRs split into pages of `page_size`
    pub fn with_prs(config: RepoConfig, prs: Vec<PullRequestSummary>, page_size: usize) -> Self {
        let pages = prs.chunks(page_size).map(<[_]>::to_vec).collect();
        Self::with_pages(config, pages)
    }

    // === Error injection methods ===

    /// Make listing `page` return an error
    pub fn fail_page(&self, page: u32, msg: &str) {
        self.error_on_page
            .lock()
            .unwrap()
            .insert(page, msg.to_string());
    }

    // === Call verification methods ===

    /// Get all pages that were requested, in order
    pub fn get_list_calls(&self) -> Vec<u32> {
        self.list_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn list_closed_pull_requests(&self, page: u32) -> Result<PullRequestPage> {
        self.list_calls.lock().unwrap().push(page);

        // Check for injected error
        if let Some(msg) = self.error_on_page.lock().unwrap().get(&page) {
            return Err(Error::Platform(msg.clone()));
        }

        let index = usize::try_from(page)
            .ok()
            .and_then(|p| p.checked_sub(1))
            .ok_or_else(|| Error::Platform(format!("invalid page {page}")))?;

        Ok(PullRequestPage {
            items: self.pages.get(index).cloned().unwrap_or_default(),
            has_next: index + 1 < self.pages.len(),
        })
    }

    fn config(&self) -> &RepoConfig {
        &self.config
    }
}

/// Simple mock messaging service for testing
#[derive(Default)]
pub struct MockMessagingService {
    post_calls: Mutex<Vec<PostMessageCall>>,
    error_on_post: Mutex<Option<String>>,
}

impl MockMessagingService {
    /// Create a mock that accepts every message
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `post_message` return an error
    pub fn fail_post(&self, msg: &str) {
        *self.error_on_post.lock().unwrap() = Some(msg.to_string());
    }

    /// Get all `post_message` calls
    pub fn get_post_calls(&self) -> Vec<PostMessageCall> {
        self.post_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagingService for MockMessagingService {
    async fn post_message(&self, channel: &str, text: &str) -> Result<()> {
        self.post_calls.lock().unwrap().push(PostMessageCall {
            channel: channel.to_string(),
            text: text.to_string(),
        });

        if let Some(msg) = self.error_on_post.lock().unwrap().as_ref() {
            return Err(Error::Slack(msg.clone()));
        }
        Ok(())
    }
}
