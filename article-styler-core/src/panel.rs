//! 面板可见性状态机
//!
//! 状态集合 {Open, Closed}，初始 Closed。
//! 构造时一次性确定模式，组件整个生命周期内不再变化：
//! - `SelfManaged`：面板自管理开合；打开期间持有「外部按下」监听器，
//!   离开 Open（包括 Drop）时必定释放。
//! - `HostControlled`：可见性完全由宿主驱动，切换控件是刻意的静默空操作。

/// 外部指针按下监听器（作用域资源）
///
/// 把全局事件监听建模为显式的获取/释放句柄，而不是常驻注册加内部
/// 提前返回的守卫。这样生命周期契约可以脱离 UI 运行时独立测试。
pub trait PointerListener {
    /// 进入 Open 时获取
    fn acquire(&mut self);
    /// 离开 Open 或组件销毁时释放
    fn release(&mut self);
}

/// 默认监听器：不做任何事（宿主在事件层自行做命中测试时使用）
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl PointerListener for NoopListener {
    fn acquire(&mut self) {}
    fn release(&mut self) {}
}

/// 可见性模式（构造时确定，之后固定）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityMode {
    /// 宿主控制：可见性始终读取宿主提供的值
    HostControlled,
    /// 自管理：面板自己持有开合状态
    SelfManaged,
}

/// 面板可见性状态机
pub struct PanelVisibility {
    mode: VisibilityMode,
    /// 自管理模式下的开合状态
    open: bool,
    /// 宿主控制模式下宿主提供的值
    host_open: bool,
    listener: Box<dyn PointerListener>,
    /// 监听器当前是否被持有（保证获取/释放严格配对）
    listener_held: bool,
}

impl PanelVisibility {
    /// 创建自管理面板（初始 Closed）
    #[must_use]
    pub fn self_managed() -> Self {
        Self::with_listener(VisibilityMode::SelfManaged, Box::new(NoopListener))
    }

    /// 创建宿主控制面板，`open` 为宿主提供的初始可见性
    #[must_use]
    pub fn host_controlled(open: bool) -> Self {
        let mut panel = Self::with_listener(VisibilityMode::HostControlled, Box::new(NoopListener));
        panel.host_open = open;
        panel
    }

    /// 创建面板并挂接监听器
    #[must_use]
    pub fn with_listener(mode: VisibilityMode, listener: Box<dyn PointerListener>) -> Self {
        Self {
            mode,
            open: false,
            host_open: false,
            listener,
            listener_held: false,
        }
    }

    /// 当前模式
    #[must_use]
    pub const fn mode(&self) -> VisibilityMode {
        self.mode
    }

    /// 当前是否可见
    #[must_use]
    pub const fn is_open(&self) -> bool {
        match self.mode {
            VisibilityMode::HostControlled => self.host_open,
            VisibilityMode::SelfManaged => self.open,
        }
    }

    /// 切换控件被激活
    ///
    /// 自管理模式下翻转开合；宿主控制模式下是静默空操作（设计如此，
    /// 供外部驱动可见性的嵌入场景使用）。
    pub fn toggle(&mut self) {
        match self.mode {
            VisibilityMode::HostControlled => {
                log::debug!("toggle ignored: panel is host-controlled");
            }
            VisibilityMode::SelfManaged => {
                self.set_open(!self.open);
            }
        }
    }

    /// 在面板与切换控件之外发生了指针按下
    ///
    /// 仅自管理模式且 Open 时关闭面板；Closed 时监听器本就不在位，
    /// 不发生任何转移。
    pub fn outside_pointer_down(&mut self) {
        if self.mode == VisibilityMode::SelfManaged && self.open {
            self.set_open(false);
        }
    }

    /// 宿主更新可见性值（仅宿主控制模式有效）
    pub fn set_host_open(&mut self, open: bool) {
        match self.mode {
            VisibilityMode::HostControlled => self.host_open = open,
            VisibilityMode::SelfManaged => {
                log::debug!("set_host_open ignored: panel is self-managed");
            }
        }
    }

    /// 自管理开合转移，同步监听器的获取/释放
    fn set_open(&mut self, open: bool) {
        if self.open == open {
            return;
        }
        self.open = open;
        if open {
            debug_assert!(!self.listener_held);
            self.listener.acquire();
            self.listener_held = true;
        } else if self.listener_held {
            self.listener.release();
            self.listener_held = false;
        }
    }
}

impl Drop for PanelVisibility {
    // 组件销毁也是离开 Open 的一条退出路径
    fn drop(&mut self) {
        if self.listener_held {
            self.listener.release();
            self.listener_held = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// 计数监听器：记录获取/释放次数
    struct CountingListener {
        acquired: Rc<Cell<usize>>,
        released: Rc<Cell<usize>>,
    }

    impl PointerListener for CountingListener {
        fn acquire(&mut self) {
            self.acquired.set(self.acquired.get() + 1);
        }

        fn release(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    fn counting_panel() -> (PanelVisibility, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let acquired = Rc::new(Cell::new(0));
        let released = Rc::new(Cell::new(0));
        let panel = PanelVisibility::with_listener(
            VisibilityMode::SelfManaged,
            Box::new(CountingListener {
                acquired: Rc::clone(&acquired),
                released: Rc::clone(&released),
            }),
        );
        (panel, acquired, released)
    }

    #[test]
    fn self_managed_starts_closed_and_toggles() {
        let mut panel = PanelVisibility::self_managed();
        assert!(!panel.is_open());

        panel.toggle();
        assert!(panel.is_open());

        panel.toggle();
        assert!(!panel.is_open());
    }

    #[test]
    fn outside_press_closes_only_while_open() {
        let mut panel = PanelVisibility::self_managed();

        // Closed 时外部按下不产生转移
        panel.outside_pointer_down();
        assert!(!panel.is_open());

        panel.toggle();
        panel.outside_pointer_down();
        assert!(!panel.is_open());
    }

    #[test]
    fn host_controlled_ignores_toggle() {
        let mut panel = PanelVisibility::host_controlled(true);
        assert!(panel.is_open());

        panel.toggle();
        assert!(panel.is_open(), "toggle must be a silent no-op");

        panel.set_host_open(false);
        assert!(!panel.is_open());

        panel.toggle();
        assert!(!panel.is_open());
    }

    #[test]
    fn host_controlled_never_reacts_to_outside_press() {
        let mut panel = PanelVisibility::host_controlled(true);
        panel.outside_pointer_down();
        assert!(panel.is_open());
    }

    #[test]
    fn listener_is_scoped_to_open_state() {
        let (mut panel, acquired, released) = counting_panel();
        assert_eq!(acquired.get(), 0);

        panel.toggle(); // -> Open
        assert_eq!(acquired.get(), 1);
        assert_eq!(released.get(), 0);

        panel.toggle(); // -> Closed
        assert_eq!(released.get(), 1);

        // 反复开合不泄漏
        panel.toggle();
        panel.outside_pointer_down();
        assert_eq!(acquired.get(), 2);
        assert_eq!(released.get(), 2);
    }

    #[test]
    fn drop_releases_listener_while_open() {
        let (mut panel, acquired, released) = counting_panel();
        panel.toggle(); // -> Open
        drop(panel);

        assert_eq!(acquired.get(), 1);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn drop_while_closed_releases_nothing() {
        let (panel, _acquired, released) = counting_panel();
        drop(panel);
        assert_eq!(released.get(), 0);
    }
}
