use inkpad_core::{
    encode_image_blob, ArticleMeta, ArticlePayload, ArticleStore, BufferCursor, EditingSession,
    ImageStore, Reply, SessionError,
};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
struct ImageCall {
    article_id: Option<String>,
    blob: Option<String>,
}

#[derive(Default)]
struct ScriptedImages {
    replies: RefCell<VecDeque<Reply<String>>>,
    calls: RefCell<Vec<ImageCall>>,
}

impl ScriptedImages {
    fn with_replies(replies: Vec<Reply<String>>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            calls: RefCell::default(),
        }
    }

    fn next_reply(&self) -> Reply<String> {
        self.replies
            .borrow_mut()
            .pop_front()
            .expect("scripted image reply")
    }

    fn last_call(&self) -> ImageCall {
        self.calls.borrow().last().cloned().expect("a recorded call")
    }
}

impl ImageStore for ScriptedImages {
    fn insert_image(&self, article_id: Option<&str>) -> Reply<String> {
        self.calls.borrow_mut().push(ImageCall {
            article_id: article_id.map(str::to_string),
            blob: None,
        });
        self.next_reply()
    }

    fn insert_image_blob(&self, article_id: Option<&str>, blob: &str) -> Reply<String> {
        self.calls.borrow_mut().push(ImageCall {
            article_id: article_id.map(str::to_string),
            blob: Some(blob.to_string()),
        });
        self.next_reply()
    }
}

struct SaveOnlyArticles {
    id: &'static str,
}

impl ArticleStore for SaveOnlyArticles {
    fn get(&self, _id: &str) -> Reply<ArticlePayload> {
        Reply::fail("get not scripted")
    }

    fn save(&self, _id: Option<&str>, _meta: &ArticleMeta, _content: &str) -> Reply<String> {
        Reply::ok(self.id.to_string())
    }
}

#[test]
fn explicit_insert_places_markdown_reference_at_cursor() {
    let images = ScriptedImages::with_replies(vec![Reply::ok("images/9/shot.png".to_string())]);
    let mut session = EditingSession::new(SaveOnlyArticles { id: "9" }, &images);
    let mut cursor = BufferCursor::new("intro\n\noutro", 7, 7);

    session
        .insert_image(&mut cursor)
        .expect("insertion succeeds");

    assert_eq!(session.article().body, "intro\n\n![](images/9/shot.png)\noutro");
    assert_eq!(cursor.text(), session.article().body);
    assert!(session.dirty());

    // No save has happened yet, so the slot request carries no article id.
    assert_eq!(images.last_call().article_id, None);
}

#[test]
fn insert_requests_a_slot_for_the_current_article_id() {
    let images = ScriptedImages::with_replies(vec![Reply::ok("images/77/a.png".to_string())]);
    let mut session = EditingSession::new(SaveOnlyArticles { id: "77" }, &images);

    session.save().expect("save assigns id");

    let mut cursor = BufferCursor::new("", 0, 0);
    session
        .insert_image(&mut cursor)
        .expect("insertion succeeds");

    assert_eq!(images.last_call().article_id.as_deref(), Some("77"));
}

#[test]
fn failed_image_call_inserts_nothing() {
    let images = ScriptedImages::with_replies(vec![Reply::fail("no space left")]);
    let mut session = EditingSession::new(SaveOnlyArticles { id: "1" }, &images);
    let mut cursor = BufferCursor::new("body text", 4, 4);

    let err = session
        .insert_image(&mut cursor)
        .expect_err("scripted failure");

    assert!(matches!(err, SessionError::Image(_)));
    assert_eq!(cursor.text(), "body text");
    assert!(session.article().body.is_empty());
    assert!(!session.dirty());
}

#[test]
fn blob_flow_encodes_bytes_and_inserts_the_stored_path() {
    let images = ScriptedImages::with_replies(vec![Reply::ok("images/1/pasted.png".to_string())]);
    let mut session = EditingSession::new(SaveOnlyArticles { id: "1" }, &images);
    let mut cursor = BufferCursor::new("", 0, 0);

    let bytes = [137_u8, 80, 78, 71];
    session
        .insert_image_blob(&mut cursor, &bytes)
        .expect("insertion succeeds");

    let call = images.last_call();
    assert_eq!(call.blob.as_deref(), Some("[137,80,78,71]"));
    assert_eq!(call.blob.as_deref(), Some(encode_image_blob(&bytes).as_str()));
    assert_eq!(session.article().body, "![](images/1/pasted.png)\n");
    assert!(session.dirty());
}

#[test]
fn blob_failure_leaves_body_and_dirty_untouched() {
    let images = ScriptedImages::with_replies(vec![Reply::fail("write failed")]);
    let mut session = EditingSession::new(SaveOnlyArticles { id: "1" }, &images);
    let mut cursor = BufferCursor::new("keep me", 0, 0);

    let err = session
        .insert_image_blob(&mut cursor, &[1, 2, 3])
        .expect_err("scripted failure");

    assert!(matches!(err, SessionError::Image(_)));
    assert_eq!(cursor.text(), "keep me");
    assert!(!session.dirty());
}

#[test]
fn stored_image_with_no_cursor_context_inserts_nothing() {
    let images = ScriptedImages::with_replies(vec![Reply::ok("images/1/a.png".to_string())]);
    let mut session = EditingSession::new(SaveOnlyArticles { id: "1" }, &images);
    let mut cursor = BufferCursor::detached();

    let err = session
        .insert_image(&mut cursor)
        .expect_err("no widget attached");

    assert!(matches!(err, SessionError::CursorUnavailable));
    assert!(session.article().body.is_empty());
    assert!(!session.dirty());
}
