use super::*;

#[test]
fn test_new_context_is_idle() {
    let context = RenderContext::new();
    assert!(!context.is_rendering());
}

#[test]
fn test_token_marks_context_busy_until_dropped() {
    let context = RenderContext::new();
    {
        let _token = context.try_begin().expect("idle context");
        assert!(context.is_rendering());
        assert!(context.try_begin().is_none());
        // A refused attempt must not release the outer token
        assert!(context.is_rendering());
    }
    assert!(!context.is_rendering());
    assert!(context.try_begin().is_some());
}

#[test]
fn test_token_released_on_early_return() {
    fn fails(context: &RenderContext) -> Result<(), ()> {
        let _token = context.try_begin().ok_or(())?;
        Err(())
    }

    let context = RenderContext::new();
    assert!(fails(&context).is_err());
    assert!(!context.is_rendering());
}
