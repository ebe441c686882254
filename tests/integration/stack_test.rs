use goto::core::DirectoryStack;
use goto::GotoError;
use tempfile::TempDir;

#[test]
fn test_pop_on_fresh_stack_is_empty_error() {
    let temp_dir = TempDir::new().unwrap();
    let stack = DirectoryStack::new(temp_dir.path().join("goto_stack"));

    assert!(matches!(stack.pop(), Err(GotoError::EmptyStack)));
    assert!(!stack.path().exists());
}

#[test]
fn test_pops_in_reverse_push_order() {
    let temp_dir = TempDir::new().unwrap();
    let stack = DirectoryStack::new(temp_dir.path().join("goto_stack"));
    let pushed: Vec<String> = (1..=6).map(|i| format!("/dir/{}", i)).collect();

    for dir in &pushed {
        stack.push(dir).unwrap();
    }
    assert_eq!(stack.size().unwrap(), pushed.len());

    let popped: Vec<String> = (0..pushed.len()).map(|_| stack.pop().unwrap()).collect();
    let expected: Vec<String> = pushed.iter().rev().cloned().collect();
    assert_eq!(popped, expected);
    assert!(matches!(stack.peek(), Err(GotoError::EmptyStack)));
}

#[test]
fn test_stack_shared_between_instances() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("goto_stack");

    DirectoryStack::new(&path).push("/first").unwrap();
    DirectoryStack::new(&path).push("/second").unwrap();

    let stack = DirectoryStack::new(&path);
    assert_eq!(stack.peek().unwrap(), "/second");
    assert_eq!(stack.entries().unwrap(), vec!["/first", "/second"]);
}

#[test]
fn test_exit_code_for_empty_stack() {
    assert_eq!(GotoError::EmptyStack.exit_code(), goto::error::exit_code::NOT_FOUND);
}
