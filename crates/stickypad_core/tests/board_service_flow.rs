use stickypad_core::{
    AcknowledgeGateway, BoardService, FocusTarget, FrameState, GatewayResult, HiddenRange,
    LoadResponse, MaskSegment, NotePatch, NoteSnapshot, NoteStore, Palette, PersistenceGateway,
    SaveReceipt, SelectionSpan,
};

fn service() -> BoardService<AcknowledgeGateway> {
    BoardService::new(NoteStore::default(), AcknowledgeGateway::new())
}

/// Gateway double that records saves and hands back canned snapshots.
struct CannedGateway {
    canned: Vec<NoteSnapshot>,
}

impl PersistenceGateway for CannedGateway {
    fn gateway_id(&self) -> &'static str {
        "canned"
    }

    fn save(&self, notes: &[NoteSnapshot]) -> GatewayResult<SaveReceipt> {
        Ok(SaveReceipt {
            saved: notes.len(),
            message: format!("stored {} notes", notes.len()),
        })
    }

    fn load(&self) -> GatewayResult<LoadResponse> {
        Ok(LoadResponse {
            notes: Some(self.canned.clone()),
            message: "board replaced".to_string(),
        })
    }
}

#[test]
fn stale_ids_are_absorbed_silently() {
    let mut service = service();
    let id = service.create_note();
    assert!(service.delete_note(id));

    assert!(!service.update_note(id, &NotePatch::title("ghost")));
    assert!(!service.delete_note(id));
    assert!(!service.select_note(id));
    assert!(!service.activate_note(id));
    assert!(service.render_note(id).is_none());
}

#[test]
fn delete_key_is_ignored_while_typing() {
    let mut service = service();
    let id = service.create_note();

    assert_eq!(service.handle_delete_key(FocusTarget::TextInput), None);
    assert!(service.note(id).is_some());

    assert_eq!(service.handle_delete_key(FocusTarget::Surface), Some(id));
    assert!(service.note(id).is_none());
}

#[test]
fn delete_key_without_selection_is_a_no_op() {
    let mut service = service();
    assert_eq!(service.handle_delete_key(FocusTarget::Surface), None);
}

#[test]
fn hide_selection_masks_the_selected_note() {
    let mut service = service();
    let id = service.create_note();
    service.update_note(id, &NotePatch::content("hello world"));

    assert!(service.hide_selection(SelectionSpan::new(0, 5)));

    let segments = service.render_note(id).unwrap();
    assert_eq!(segments[0], MaskSegment::Masked("hello".to_string()));
}

#[test]
fn hide_selection_rejects_collapsed_and_stale_spans() {
    let mut service = service();
    let id = service.create_note();
    service.update_note(id, &NotePatch::content("short"));

    assert!(!service.hide_selection(SelectionSpan::new(2, 2)));
    assert!(!service.hide_selection(SelectionSpan::new(0, 50)));
    assert!(service.note(id).unwrap().hidden_ranges.is_empty());
}

#[test]
fn hide_selection_without_a_selected_note_is_a_no_op() {
    let mut service = service();
    assert!(!service.hide_selection(SelectionSpan::new(0, 3)));
}

#[test]
fn restore_selected_clears_all_masks() {
    let mut service = service();
    let id = service.create_note();
    service.update_note(id, &NotePatch::content("hello world"));
    service.hide_selection(SelectionSpan::new(0, 5));
    service.hide_selection(SelectionSpan::new(6, 11));

    assert_eq!(service.restore_selected(), 2);
    assert_eq!(
        service.render_note(id).unwrap(),
        vec![MaskSegment::Plain("hello world".to_string())]
    );
}

#[test]
fn editing_flow_bypasses_masks_until_closed() {
    let mut service = service();
    let id = service.create_note();
    service.update_note(id, &NotePatch::content("hello world"));
    service.hide_selection(SelectionSpan::new(0, 5));

    // Second activation of the active note opens the editor.
    service.activate_note(id);
    service.stage_edit(id, &NotePatch::content("hello there"));
    assert_eq!(
        service.render_note(id).unwrap(),
        vec![MaskSegment::Plain("hello there".to_string())]
    );

    service.deactivate();
    let note = service.note(id).unwrap();
    assert_eq!(note.content, "hello there");
    assert_eq!(note.hidden_ranges, vec![HiddenRange::new(0, 5)]);
    assert!(service.render_note(id).unwrap()[0].is_masked());
}

#[test]
fn save_board_reports_the_acknowledgement() {
    let mut service = service();
    service.create_note();
    service.create_note();

    let receipt = service.save_board().unwrap();
    assert_eq!(receipt.saved, 2);
    assert!(receipt.message.contains("saved"));
}

#[test]
fn load_from_acknowledge_gateway_keeps_the_collection() {
    let mut service = service();
    let id = service.create_note();

    let message = service.load_board().unwrap();
    assert!(message.contains("refreshed"));
    assert!(service.note(id).is_some());
}

#[test]
fn load_with_snapshots_replaces_the_collection() {
    let gateway = CannedGateway {
        canned: vec![NoteSnapshot {
            id: 21,
            title: "restored".to_string(),
            content: "from the gateway".to_string(),
            color: "#4ADE80".to_string(),
            hidden_ranges: vec![HiddenRange::new(0, 4)],
        }],
    };
    let mut service = BoardService::new(NoteStore::default(), gateway);
    service.create_note();

    let message = service.load_board().unwrap();
    assert_eq!(message, "board replaced");
    assert_eq!(service.notes().len(), 1);
    assert_eq!(service.notes()[0].title, "restored");
    assert!(service.selected_id().is_none());

    // Fresh creations never collide with loaded IDs.
    let fresh = service.create_note();
    assert!(fresh > 21);
}

#[test]
fn seeded_board_flows_through_the_service() {
    let store = stickypad_core::seeded_store(Palette::default());
    let mut service = BoardService::new(store, AcknowledgeGateway::new());

    assert_eq!(service.notes().len(), 4);
    let receipt = service.save_board().unwrap();
    assert_eq!(receipt.saved, 4);

    let id = service.notes()[1].id;
    assert!(service.select_note(id));
    assert!(service.hide_selection(SelectionSpan::new(0, 10)));
}

#[test]
fn frame_transitions_pass_through() {
    let mut service = service();
    assert_eq!(service.frame_state(), FrameState::Normal);
    assert!(service.always_on_top());

    service.minimize_frame();
    assert_eq!(service.frame_state(), FrameState::Minimized);
    service.restore_frame();
    service.hide_frame();
    assert_eq!(service.frame_state(), FrameState::Hidden);
    service.reveal_frame();
    assert_eq!(service.frame_state(), FrameState::Normal);

    assert!(!service.toggle_always_on_top());
}
