//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Service endpoints
pub const GET_NOTES_BASE_URL: &str = "https://get-notes.luojilab.com";
pub const FEISHU_BASE_URL: &str = "https://open.feishu.cn/open-apis";

// Paging and batching limits
pub const NOTES_PAGE_SIZE: u32 = 100;
pub const RECORDS_SEARCH_PAGE_SIZE: u32 = 300;
pub const BATCH_CREATE_LIMIT: usize = 500;
pub const DEFAULT_NOTES_SORT: &str = "create_desc";

// Pacing between paged calls (both services are rate sensitive)
pub const INTER_PAGE_DELAY_MS: u64 = 1000;
pub const INTER_BATCH_DELAY_MS: u64 = 1000;

// Token lifetime safety margin: refresh 5 minutes before reported expiry
pub const TOKEN_REFRESH_MARGIN_SECS: u64 = 300;

// HTTP client
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Attachment type that maps to the source-link field
pub const LINK_ATTACHMENT_TYPE: &str = "link";

// Bitable column names (the destination table is configured in Chinese)
pub const FIELD_TITLE: &str = "标题";
pub const FIELD_CONTENT: &str = "笔记内容";
pub const FIELD_BODY_TEXT: &str = "笔记内容（纯文本）";
pub const FIELD_NOTE_ID: &str = "笔记id";
pub const FIELD_NOTE_KIND: &str = "笔记类型";
pub const FIELD_TAGS: &str = "标签";
pub const FIELD_SOURCE_LINK: &str = "原文链接";
pub const FIELD_CREATED_AT: &str = "笔记创建时间";
pub const FIELD_EDITED_AT: &str = "上次编辑时间";
