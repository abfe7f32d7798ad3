use codapkit_cases::{AttrId, Attribute, AttributeTipSource, Case, DataTip};
use codapkit_core::{thread_safe, AppEvent, EventBus, EventCategory, EventFilter, SelectionEvent};
use std::sync::Arc;

#[test]
fn test_tip_refreshes_from_selection_events() {
    let source = thread_safe(AttributeTipSource::new(
        vec![Attribute::new(AttrId(1), "Height").with_unit(" cm")],
        vec![
            Case::new(1).with_value(AttrId(1), 170),
            Case::new(2).with_value(AttrId(1), 182.5),
        ],
    ));
    let tip = thread_safe(DataTip::new());
    tip.lock().show(5.0, 5.0, 1, &*source.lock());
    assert_eq!(tip.lock().text(), "Height: 182.5 cm");

    let bus = EventBus::new();
    {
        let source = Arc::clone(&source);
        let tip = Arc::clone(&tip);
        bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Selection]),
            move |event| {
                if let AppEvent::Selection(SelectionEvent::CasesChanged(changes)) = event {
                    tip.lock().handle_changes(&changes, &*source.lock());
                }
            },
        );
    }

    if let Some(case) = source.lock().case_mut(1) {
        case.set_value(AttrId(1), 183);
    }
    bus.publish(AppEvent::Selection(SelectionEvent::CasesChanged(1.into())))
        .expect("publish");
    assert_eq!(tip.lock().text(), "Height: 183 cm");
}
