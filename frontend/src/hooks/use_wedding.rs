use std::rc::Rc;

use shared::WeddingInfo;
use yew::prelude::*;

/// Access the process-wide wedding facts provided at the app root.
#[hook]
pub fn use_wedding() -> Rc<WeddingInfo> {
    use_context::<Rc<WeddingInfo>>().expect("use_wedding must be used under the app provider")
}
