//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Navigation,                  // 当前焦点在哪个面板
//!     navigation: NavigationState{
//!         items: [Home , Customers , Settings],
//!         selected = 0                                    // 当前选中第几项，默认为 0
//!     },
//!     current_page = Page::Home,                      // 当前应该显示哪个页面，默认为 Home
//!     status_message = None,                          // 状态栏消息
//!     config,                                         // 启动时加载的配置
//!     customers / detail / settings / modal           // 各页面状态
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     while let Ok(reply) = rx.try_recv() {           // 先收取后台任务的结果
//!         let cmd = update(&mut app , Backend(reply));    // 结果也是消息，可能引出新的命令
//!         dispatch(cmd);
//!     }
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         let cmd = update::update(&mut app , msg);       // 更新终端状态
//!         dispatch(cmd);                                  // 需要 I/O 时交给 Backend
//!     }
//! }

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::{Backend, Command};
use crate::event;
use crate::message::{AppMessage, BackendMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询超时
const TICK: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &Backend,
    rx: &mut UnboundedReceiver<BackendMessage>,
) -> Result<()> {
    loop {
        // 1. 合并后台结果
        while let Ok(reply) = rx.try_recv() {
            let command = update::update(app, AppMessage::Backend(reply));
            dispatch(backend, command);
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(TICK)? {
            let msg = event::handle_event(event, app);
            let command = update::update(app, msg);
            dispatch(backend, command);
        }
    }

    log::info!("main loop finished");
    Ok(())
}

fn dispatch(backend: &Backend, command: Option<Command>) {
    if let Some(command) = command {
        backend.dispatch(command);
    }
}
