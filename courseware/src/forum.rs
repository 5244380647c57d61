//! Course discussion forums: threads, posts, and votes.

#[cfg(test)]
#[path = "forum_test.rs"]
mod forum_test;

use serde::{Deserialize, Serialize};

use crate::numbers;

/// Forum attached to one course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Forum {
    pub id: String,
    pub course_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub threads_count: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub posts_count: i64,
}

/// Author columns embedded with `users(full_name, avatar_url)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Author {
    #[must_use]
    pub fn display_name(author: Option<&Self>) -> &str {
        author
            .and_then(|a| a.full_name.as_deref())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("Anonymous")
    }
}

/// A discussion thread.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForumThread {
    pub id: String,
    pub forum_id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub content: String,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub views_count: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub replies_count: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub upvotes_count: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub downvotes_count: i64,
    #[serde(default)]
    pub has_best_answer: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_activity_at: Option<String>,
    #[serde(default, alias = "users")]
    pub author: Option<Author>,
    /// Present only on the thread detail response.
    #[serde(default)]
    pub posts: Vec<ForumPost>,
}

impl ForumThread {
    #[must_use]
    pub fn score(&self) -> i64 {
        vote_score(self.upvotes_count, self.downvotes_count)
    }

    /// Best-answer post, if one is marked.
    #[must_use]
    pub fn best_answer(&self) -> Option<&ForumPost> {
        self.posts.iter().find(|post| post.is_best_answer)
    }
}

/// A reply inside a thread.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: String,
    pub thread_id: String,
    pub user_id: String,
    pub content: String,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub upvotes_count: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub downvotes_count: i64,
    #[serde(default)]
    pub is_best_answer: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, alias = "users")]
    pub author: Option<Author>,
}

impl ForumPost {
    #[must_use]
    pub fn score(&self) -> i64 {
        vote_score(self.upvotes_count, self.downvotes_count)
    }
}

/// Net vote tally shown next to threads and posts.
#[must_use]
pub fn vote_score(upvotes: i64, downvotes: i64) -> i64 {
    upvotes.saturating_sub(downvotes)
}

/// Server-side thread ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThreadSort {
    #[default]
    Recent,
    Popular,
    MostReplied,
}

impl ThreadSort {
    pub const ALL: [Self; 3] = [Self::Recent, Self::Popular, Self::MostReplied];

    /// Value of the `sort_by` query parameter.
    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Popular => "popular",
            Self::MostReplied => "most_replied",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Recent => "Recent",
            Self::Popular => "Popular",
            Self::MostReplied => "Most replied",
        }
    }

    /// Inverse of [`ThreadSort::as_param`]; unknown values fall back to recent.
    #[must_use]
    pub fn from_param(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_param() == raw)
            .unwrap_or_default()
    }
}

/// What a vote targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VotableType {
    Thread,
    Post,
}

/// Direction of a vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Upvote,
    Downvote,
}

/// Body of `POST /api/forums/vote`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VoteRequest {
    pub user_id: String,
    pub votable_type: VotableType,
    pub votable_id: String,
    pub vote_type: VoteType,
}

/// How the backend applied a vote. Repeating a vote removes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteAction {
    Added,
    Changed,
    Removed,
}

/// Response of `POST /api/forums/vote`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteOutcome {
    pub action: VoteAction,
    pub vote_type: VoteType,
}

/// Body of `POST /api/forums/threads`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewThread {
    pub forum_id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
}

impl NewThread {
    /// Trim inputs and require both a title and a body.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when either field is blank.
    pub fn new(forum_id: &str, user_id: &str, title: &str, content: &str) -> Result<Self, &'static str> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() || content.is_empty() {
            return Err("A thread needs a title and a message.");
        }
        Ok(Self {
            forum_id: forum_id.to_owned(),
            user_id: user_id.to_owned(),
            title: title.to_owned(),
            content: content.to_owned(),
        })
    }
}

/// Body of `POST /api/forums/posts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub thread_id: String,
    pub user_id: String,
    pub content: String,
}

impl NewPost {
    /// Trim the reply and require it to be non-empty.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the reply is blank.
    pub fn new(thread_id: &str, user_id: &str, content: &str) -> Result<Self, &'static str> {
        let content = content.trim();
        if content.is_empty() {
            return Err("Write a reply first.");
        }
        Ok(Self {
            thread_id: thread_id.to_owned(),
            user_id: user_id.to_owned(),
            content: content.to_owned(),
        })
    }
}
