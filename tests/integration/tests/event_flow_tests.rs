//! End-to-end tests for the cross-context event flows
//!
//! Each test wires real services, the real bus, and the real correlation
//! store over in-memory repositories, so the full publish / consume /
//! complete / await sequence runs inside the test process.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use board_core::{ContentType, DomainEvent, InteractionType, Snowflake};
use board_events::{EventHandler, HandlerError};
use board_service::{CommentService, InteractionService, PostService};
use integration_tests::{
    bare_context, comment_request, post_request, test_context, unique_user_id,
};

#[tokio::test]
async fn bookmarked_posts_round_trip() {
    let ctx = test_context();
    let user_id = unique_user_id();
    let reader_id = unique_user_id();

    let posts = PostService::new(&ctx);
    let interactions = InteractionService::new(&ctx);

    let first = posts.create_post(user_id, post_request()).await.unwrap();
    let second = posts.create_post(user_id, post_request()).await.unwrap();
    let third = posts.create_post(user_id, post_request()).await.unwrap();

    let first_id: Snowflake = first.id.parse().unwrap();
    let third_id: Snowflake = third.id.parse().unwrap();

    interactions
        .toggle_interaction(reader_id, first_id, InteractionType::Bookmark, ContentType::Post)
        .await
        .unwrap();
    interactions
        .toggle_interaction(reader_id, third_id, InteractionType::Bookmark, ContentType::Post)
        .await
        .unwrap();

    let bookmarked = posts
        .get_bookmarked_posts(reader_id, ContentType::Post)
        .await
        .unwrap();

    let mut ids: Vec<String> = bookmarked.iter().map(|p| p.id.clone()).collect();
    ids.sort();
    let mut expected = vec![first.id.clone(), third.id.clone()];
    expected.sort();
    assert_eq!(ids, expected);
    assert!(bookmarked.iter().all(|p| p.is_bookmarked));
    assert!(!ids.contains(&second.id));
}

#[tokio::test]
async fn toggling_a_bookmark_off_removes_it_from_the_list() {
    let ctx = test_context();
    let author_id = unique_user_id();
    let reader_id = unique_user_id();

    let posts = PostService::new(&ctx);
    let interactions = InteractionService::new(&ctx);

    let post = posts.create_post(author_id, post_request()).await.unwrap();
    let post_id: Snowflake = post.id.parse().unwrap();

    let on = interactions
        .toggle_interaction(reader_id, post_id, InteractionType::Bookmark, ContentType::Post)
        .await
        .unwrap();
    assert_eq!(on.status, "ACTIVE");

    let off = interactions
        .toggle_interaction(reader_id, post_id, InteractionType::Bookmark, ContentType::Post)
        .await
        .unwrap();
    assert_eq!(off.status, "INACTIVE");
    assert_eq!(off.id, on.id);

    let bookmarked = posts
        .get_bookmarked_posts(reader_id, ContentType::Post)
        .await
        .unwrap();
    assert!(bookmarked.is_empty());

    // A third toggle reactivates the same record.
    let back_on = interactions
        .toggle_interaction(reader_id, post_id, InteractionType::Bookmark, ContentType::Post)
        .await
        .unwrap();
    assert_eq!(back_on.status, "ACTIVE");
    assert_eq!(back_on.id, on.id);

    let bookmarked = posts
        .get_bookmarked_posts(reader_id, ContentType::Post)
        .await
        .unwrap();
    assert_eq!(bookmarked.len(), 1);
}

#[tokio::test]
async fn comment_like_counts_flow_through_the_event_bridge() {
    let ctx = test_context();
    let author_id = unique_user_id();

    let posts = PostService::new(&ctx);
    let comments = CommentService::new(&ctx);
    let interactions = InteractionService::new(&ctx);

    let post = posts.create_post(author_id, post_request()).await.unwrap();
    let post_id: Snowflake = post.id.parse().unwrap();

    let liked = comments
        .create_comment(author_id, comment_request(post_id))
        .await
        .unwrap();
    let unliked = comments
        .create_comment(author_id, comment_request(post_id))
        .await
        .unwrap();
    let liked_id: Snowflake = liked.id.parse().unwrap();

    for _ in 0..3 {
        interactions
            .toggle_interaction(
                unique_user_id(),
                liked_id,
                InteractionType::Like,
                ContentType::Comment,
            )
            .await
            .unwrap();
    }

    let listed = comments.get_comments(post_id).await.unwrap();
    assert_eq!(listed.len(), 2);

    let by_id = |id: &str| listed.iter().find(|c| c.id == id).unwrap();
    assert_eq!(by_id(&liked.id).like_count, 3);
    assert_eq!(by_id(&unliked.id).like_count, 0);
}

#[tokio::test]
async fn inactive_likes_are_not_counted() {
    let ctx = test_context();
    let author_id = unique_user_id();
    let liker_id = unique_user_id();

    let posts = PostService::new(&ctx);
    let comments = CommentService::new(&ctx);
    let interactions = InteractionService::new(&ctx);

    let post = posts.create_post(author_id, post_request()).await.unwrap();
    let post_id: Snowflake = post.id.parse().unwrap();
    let comment = comments
        .create_comment(author_id, comment_request(post_id))
        .await
        .unwrap();
    let comment_id: Snowflake = comment.id.parse().unwrap();

    interactions
        .toggle_interaction(liker_id, comment_id, InteractionType::Like, ContentType::Comment)
        .await
        .unwrap();
    interactions
        .toggle_interaction(liker_id, comment_id, InteractionType::Like, ContentType::Comment)
        .await
        .unwrap();

    let counts = comments.like_counts(&[comment_id]).await;
    assert_eq!(counts.get(&comment_id).copied().unwrap_or(0), 0);
}

#[tokio::test(start_paused = true)]
async fn missing_consumer_falls_back_to_empty_list() {
    // No consumers registered; the requester must hit its timeout default
    // rather than error or hang.
    let ctx = bare_context(Duration::from_millis(200));
    let user_id = unique_user_id();

    let bookmarked = PostService::new(&ctx)
        .get_bookmarked_posts(user_id, ContentType::Post)
        .await
        .unwrap();
    assert!(bookmarked.is_empty());

    let counts = CommentService::new(&ctx)
        .like_counts(&[Snowflake::new(42)])
        .await;
    assert!(counts.is_empty());

    // Both slots were evicted on the way out.
    assert_eq!(ctx.correlation().pending_len(), 0);
}

struct FailingHandler;

#[async_trait]
impl EventHandler for FailingHandler {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn wants(&self, event: &DomainEvent) -> bool {
        matches!(event, DomainEvent::BookmarkPostsRequested(_))
    }

    async fn handle(&self, _event: DomainEvent) -> Result<(), HandlerError> {
        Err(HandlerError::Other("consumer blew up".into()))
    }
}

#[tokio::test(start_paused = true)]
async fn failing_consumer_leaves_requester_on_its_default() {
    // The handler errors before completing the slot; the bus swallows the
    // error and the requester sees its timeout default.
    let ctx = bare_context(Duration::from_millis(200));
    ctx.event_bus().register(Arc::new(FailingHandler));

    let bookmarked = PostService::new(&ctx)
        .get_bookmarked_posts(unique_user_id(), ContentType::Post)
        .await
        .unwrap();
    assert!(bookmarked.is_empty());
    assert_eq!(ctx.correlation().pending_len(), 0);
}

#[tokio::test]
async fn like_and_bookmark_on_same_subject_are_independent() {
    let ctx = test_context();
    let author_id = unique_user_id();
    let user_id = unique_user_id();

    let posts = PostService::new(&ctx);
    let interactions = InteractionService::new(&ctx);

    let post = posts.create_post(author_id, post_request()).await.unwrap();
    let post_id: Snowflake = post.id.parse().unwrap();

    let like = interactions
        .toggle_interaction(user_id, post_id, InteractionType::Like, ContentType::Post)
        .await
        .unwrap();
    let bookmark = interactions
        .toggle_interaction(user_id, post_id, InteractionType::Bookmark, ContentType::Post)
        .await
        .unwrap();
    assert_ne!(like.id, bookmark.id);

    // Turning the like off leaves the bookmark alone.
    interactions
        .toggle_interaction(user_id, post_id, InteractionType::Like, ContentType::Post)
        .await
        .unwrap();

    let bookmarked = posts
        .get_bookmarked_posts(user_id, ContentType::Post)
        .await
        .unwrap();
    assert_eq!(bookmarked.len(), 1);

    let like_count = interactions
        .like_count(post_id, ContentType::Post)
        .await
        .unwrap();
    assert_eq!(like_count, 0);
}

#[tokio::test]
async fn view_count_increment_is_guarded_by_the_keyed_lock() {
    let ctx = test_context();
    let author_id = unique_user_id();

    let posts = PostService::new(&ctx);
    let post = posts.create_post(author_id, post_request()).await.unwrap();
    let post_id: Snowflake = post.id.parse().unwrap();

    posts.increase_view_count(post_id).await.unwrap();
    posts.increase_view_count(post_id).await.unwrap();

    let fetched = posts.get_post(post_id).await.unwrap();
    assert_eq!(fetched.view_count, 2);
}

#[tokio::test(start_paused = true)]
async fn background_view_count_increment_lands() {
    let ctx = test_context();
    let author_id = unique_user_id();

    let posts = PostService::new(&ctx);
    let post = posts.create_post(author_id, post_request()).await.unwrap();
    let post_id: Snowflake = post.id.parse().unwrap();

    // Fire-and-forget: the call returns immediately, the increment lands on
    // a background task.
    posts.increase_view_count_async(post_id);
    tokio::time::sleep(Duration::from_millis(50)).await;

    let fetched = posts.get_post(post_id).await.unwrap();
    assert_eq!(fetched.view_count, 1);
}

#[tokio::test]
async fn view_count_increment_skipped_while_lock_is_held() {
    let ctx = test_context();
    let author_id = unique_user_id();

    let posts = PostService::new(&ctx);
    let post = posts.create_post(author_id, post_request()).await.unwrap();
    let post_id: Snowflake = post.id.parse().unwrap();

    // Hold the lock the service would take.
    let key = format!("view_post:{post_id}");
    assert!(ctx.keyed_lock().acquire(&key, Duration::from_secs(5)));

    posts.increase_view_count(post_id).await.unwrap();

    let fetched = posts.get_post(post_id).await.unwrap();
    assert_eq!(fetched.view_count, 0);

    ctx.keyed_lock().release(&key);
    posts.increase_view_count(post_id).await.unwrap();
    let fetched = posts.get_post(post_id).await.unwrap();
    assert_eq!(fetched.view_count, 1);
}

#[tokio::test]
async fn only_the_author_may_edit_or_delete() {
    let ctx = test_context();
    let author_id = unique_user_id();
    let stranger_id = unique_user_id();

    let posts = PostService::new(&ctx);
    let post = posts.create_post(author_id, post_request()).await.unwrap();
    let post_id: Snowflake = post.id.parse().unwrap();

    let err = posts.delete_post(stranger_id, post_id).await.unwrap_err();
    assert_eq!(err.status_code(), 403);

    posts.delete_post(author_id, post_id).await.unwrap();
    let err = posts.get_post(post_id).await.unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn comment_on_missing_post_is_rejected() {
    let ctx = test_context();
    let err = CommentService::new(&ctx)
        .create_comment(unique_user_id(), comment_request(Snowflake::new(999_999)))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}
