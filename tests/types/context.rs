use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use value_rail::{Context, ContextFormat, ContextFormatter, Error};

fn three_frames() -> Context {
    Context::new("connection refused").wrap("fetching profile").wrap("rendering page")
}

#[test]
fn single_frame_uses_the_terminal_glyph() {
    let ctx = Context::new("only frame");
    assert_eq!(ctx.depth(), 1);
    assert_eq!(ctx.to_string(), "└── only frame");
    assert_eq!(ctx.root().message(), "only frame");
}

#[test]
fn frames_run_from_outermost_to_root() {
    let ctx = three_frames();
    assert_eq!(ctx.depth(), 3);
    assert_eq!(
        ctx.messages().collect::<Vec<_>>(),
        vec!["rendering page", "fetching profile", "connection refused"]
    );
    assert_eq!(ctx.inner().map(Context::message), Some("fetching profile"));
    assert_eq!(ctx.root().message(), "connection refused");
}

#[test]
fn wrapping_leaves_the_original_chain_intact() {
    let inner = Context::new("root");
    let outer = inner.clone().wrap("outer");
    assert_eq!(inner.depth(), 1);
    assert_eq!(outer.inner(), Some(&inner));
}

#[test]
fn default_rendering_is_a_tree() {
    assert_eq!(
        three_frames().render(),
        "├── rendering page\n├── fetching profile\n└── connection refused"
    );
}

#[test]
fn preset_formats() {
    let ctx = three_frames();
    assert_eq!(
        ctx.render_with(&ContextFormat::ascii()),
        "|-- rendering page\n|-- fetching profile\n`-- connection refused"
    );
    assert_eq!(
        ctx.render_with(&ContextFormat::inline()),
        "rendering page -> fetching profile -> connection refused"
    );
}

#[test]
fn custom_formatter_only_overrides_what_it_needs() {
    struct Numbered;

    impl ContextFormatter for Numbered {
        fn continuing_prefix(&self) -> &str {
            "> "
        }

        fn terminal_prefix(&self) -> &str {
            "# "
        }
    }

    assert_eq!(
        three_frames().render_with(&Numbered),
        "> rendering page\n> fetching profile\n# connection refused"
    );
}

#[test]
fn lazy_messages_are_accepted() {
    let ctx = Context::new(value_rail::LazyMessage::new(|| format!("attempt {}", 3)));
    assert_eq!(ctx.message(), "attempt 3");
}

fn hash_of(ctx: &Context) -> u64 {
    let mut hasher = DefaultHasher::new();
    ctx.hash(&mut hasher);
    hasher.finish()
}

fn deep(frames: usize) -> Context {
    (1..frames).fold(Context::new("frame 0"), |ctx, n| ctx.wrap(format!("frame {n}")))
}

#[test]
fn deep_chains_clone_compare_and_hash() {
    let ctx = deep(100_000);
    let copy = ctx.clone();
    assert_eq!(copy.depth(), 100_000);
    assert_eq!(copy, ctx);
    assert_eq!(copy.cmp(&ctx), std::cmp::Ordering::Equal);
    assert_eq!(hash_of(&copy), hash_of(&ctx));
    assert_eq!(copy.root().message(), "frame 0");

    let longer = ctx.clone().wrap("frame 100000");
    assert_ne!(longer, ctx);
    assert_eq!(longer.inner(), Some(&ctx));
    assert!(ctx < ctx.clone().wrap("zzz"));
}

#[test]
fn deep_error_chains_drop() {
    let err = (0..200_000).fold(Error::new(), |err, n| err.add_context(format!("step {n}")));
    assert_eq!(err.context().map(Context::depth), Some(200_000));
    assert_eq!(err.root_cause(), Some("step 0"));
    drop(err);
}

#[test]
fn ordering_is_lexicographic_over_messages() {
    let short = Context::new("b");
    let long = Context::new("c").wrap("b");
    assert!(short < long);
    assert!(Context::new("z").wrap("a") < Context::new("b"));
    assert_eq!(format!("{:?}", long), r#"Context["b", "c"]"#);
}
