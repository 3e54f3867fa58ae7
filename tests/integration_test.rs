use chhotipdf_client::editor::page_editor::PageEditorState;
use chhotipdf_client::models::preview::PagePreview;
use chhotipdf_client::services::assembler;
use chhotipdf_client::utils::logging;
use chhotipdf_client::{
    Config, Operation, ProcessingClient, QualityLevel, SelectedFile, SubmitFlow,
    WorkflowController,
};

fn pdf(name: &str) -> SelectedFile {
    SelectedFile::new(name, b"%PDF-1.4 fake".to_vec())
}

fn fake_pages(n: u32) -> Vec<PagePreview> {
    (1..=n)
        .map(|i| PagePreview {
            number: i,
            width: 612,
            height: 792,
            thumbnail: None,
        })
        .collect()
}

/// 完整的 split 流程（不联网）：选文件 → 预览 → 选页 → 组装
#[test]
fn test_split_workflow_end_to_end() {
    let mut controller = WorkflowController::new(Operation::Split);
    controller
        .select_files(vec![pdf("thesis.pdf"), pdf("ignored.txt")])
        .unwrap();
    assert_eq!(controller.selection().len(), 1);

    let generation = controller.open_page_editor().unwrap();
    assert!(controller.deliver_previews(generation, Ok(fake_pages(5))));

    let session = controller.page_editor_mut().unwrap();
    session.toggle_selection(3).unwrap();
    session.toggle_selection(1).unwrap();
    session.toggle_selection(2).unwrap();
    let arrangement = session.confirm().unwrap();

    let files = controller.selection().files().to_vec();
    let payload =
        assembler::assemble(Operation::Split, files, None, Some(arrangement)).unwrap();

    assert_eq!(payload.endpoint, "/split/pdf/pages");
    assert_eq!(payload.selected_pages.as_deref(), Some("1,2,3"));
    assert_eq!(payload.page_order, None);
    assert_eq!(
        payload.suggested_file_name.as_deref(),
        Some("chhotipdf-thesis.pdf")
    );
    // 单文件必须走单数字段
    assert_eq!(payload.file_parts()[0].0, "file");
}

/// 完整的 organize 流程（不联网）：重排 + 删除标记
#[test]
fn test_organize_workflow_end_to_end() {
    let mut controller = WorkflowController::new(Operation::Organize);
    controller.select_files(vec![pdf("contract.pdf")]).unwrap();

    let generation = controller.open_page_editor().unwrap();
    assert!(controller.deliver_previews(generation, Ok(fake_pages(4))));

    let session = controller.page_editor_mut().unwrap();
    session.drag_reorder(4, 1).unwrap();
    session.toggle_deletion(2).unwrap();
    let arrangement = session.confirm().unwrap();

    // 删除只打标记：顺序序列仍然包含页码 2
    assert_eq!(arrangement.page_order.as_deref(), Some("4,1,2,3"));
    assert_eq!(arrangement.deleted_pages.as_deref(), Some("2"));

    let files = controller.selection().files().to_vec();
    let payload =
        assembler::assemble(Operation::Organize, files, None, Some(arrangement)).unwrap();
    assert_eq!(payload.endpoint, "/organize/pdf/pages");
    assert_eq!(payload.page_order.as_deref(), Some("4,1,2,3"));
    assert_eq!(payload.deleted_pages.as_deref(), Some("2"));
}

/// 完整的 merge 流程（不联网）：文件重排后按新顺序组装
#[test]
fn test_merge_workflow_end_to_end() {
    let mut controller = WorkflowController::new(Operation::Merge);
    controller
        .select_files(vec![pdf("a.pdf"), pdf("b.pdf"), pdf("c.pdf")])
        .unwrap();

    controller.open_file_editor().unwrap();
    controller.file_editor_mut().unwrap().drag_reorder(2, 0);
    controller.confirm_file_order().unwrap();

    let files = controller.selection().files().to_vec();
    let payload = assembler::assemble(Operation::Merge, files, None, None).unwrap();

    assert_eq!(payload.endpoint, "/merge/pdf");
    let parts = payload.file_parts();
    assert_eq!(parts.len(), 3);
    assert!(parts.iter().all(|(field, _)| *field == "files"));
    assert_eq!(parts[0].1.name, "c.pdf");
    assert_eq!(
        payload.suggested_file_name.as_deref(),
        Some("chhotipdf-c.pdf")
    );
}

/// 编辑器关闭后到达的预览结果必须被丢弃，重新打开拿到新代际
#[test]
fn test_late_preview_result_is_discarded() {
    let mut controller = WorkflowController::new(Operation::Split);
    controller.select_files(vec![pdf("doc.pdf")]).unwrap();

    let stale = controller.open_page_editor().unwrap();
    controller.close_page_editor();

    // 迟到的结果：no-op，不是故障
    assert!(!controller.deliver_previews(stale, Ok(fake_pages(3))));

    let fresh = controller.open_page_editor().unwrap();
    assert!(controller.deliver_previews(fresh, Ok(fake_pages(3))));
    assert_eq!(
        controller.page_editor().unwrap().state(),
        PageEditorState::Ready
    );
}

/// 操作切换后选择必须为空，旧操作的文件不会被带入
#[test]
fn test_operation_switch_resets_workflow() {
    let mut controller = WorkflowController::new(Operation::CompressImage);
    controller
        .select_files(vec![pdf("photo.jpg"), pdf("scan.png")])
        .unwrap();
    assert_eq!(controller.selection().len(), 2);

    controller.set_operation(Operation::Compress);
    assert!(controller.selection().is_empty());
    assert!(controller.page_editor().is_none());
}

// ========== 以下测试需要本地运行处理服务 ==========

/// 测试压缩提交
#[tokio::test]
#[ignore] // 默认忽略，需要手动运行：cargo test -- --ignored
async fn test_submit_compress() {
    logging::init();

    let config = Config::from_env();
    let flow = SubmitFlow::new(&config).expect("创建提交流程失败");

    let mut controller = WorkflowController::new(Operation::Compress);
    let bytes = std::fs::read("tests/fixtures/sample.pdf").expect("缺少测试文件");
    controller
        .select_files(vec![SelectedFile::new("sample.pdf", bytes)])
        .expect("选择文件失败");

    let outcome = flow
        .run(&mut controller, Some(QualityLevel::Medium), None)
        .await
        .expect("提交失败");

    assert!(outcome.original_size > 0);
    assert!(outcome.effective_compressed_size() <= outcome.original_size);
    // 成功提交后文件选择被销毁
    assert!(controller.selection().is_empty());
}

/// 测试服务连接性
#[tokio::test]
#[ignore]
async fn test_service_reachable() {
    logging::init();

    let config = Config::from_env();
    let client = ProcessingClient::new(&config);
    assert!(client.is_ok(), "应该能够创建处理客户端");
}
