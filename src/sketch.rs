// src/sketch.rs

use log::debug;

use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// 矩形:锚点 (x, y) 在按下鼠标时固定,宽高是锚点到当前指针的有符号偏移
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    fn anchored(x: i32, y: i32) -> Rect {
        Rect { x, y, width: 0, height: 0 }
    }

    /// 归一化:返回左上角坐标和非负宽高。
    /// 反向拖拽(宽或高为负)的矩形归一化后覆盖同一块像素区域。
    pub fn normalized(&self) -> (i32, i32, i32, i32) {
        let x0 = self.x.min(self.x + self.width);
        let y0 = self.y.min(self.y + self.height);
        (x0, y0, self.width.abs(), self.height.abs())
    }
}

/// 交互状态机:Idle ←→ Drawing。
/// 持有已提交的矩形列表和正在拉伸的那一个;列表每次变化都整幅重绘一次。
pub struct Sketch {
    rects: Vec<Rect>,
    is_drawing: bool,
    current: Option<Rect>,
    surface: Surface,
}

impl Sketch {
    pub fn new(surface: Surface) -> Self {
        Sketch { rects: Vec::new(), is_drawing: false, current: None, surface }
    }

    /// 按下:以按下点为锚点新建零尺寸矩形,追加到列表末尾
    pub fn pointer_down(&mut self, x: i32, y: i32) {
        self.is_drawing = true;
        let new_rect = Rect::anchored(x, y);
        self.current = Some(new_rect);
        self.rects.push(new_rect);
        self.surface.render(&self.rects);
    }

    /// 移动:Idle 状态下忽略;否则原地替换列表末尾的矩形
    pub fn pointer_move(&mut self, x: i32, y: i32) {
        if !self.is_drawing {
            return;
        }
        // is_drawing 为真时 current 一定存在,且等于列表末尾元素
        let Some(cur) = self.current else { return };
        let updated = Rect { x: cur.x, y: cur.y, width: x - cur.x, height: y - cur.y };
        self.current = Some(updated);
        if let Some(last) = self.rects.last_mut() {
            *last = updated;
        }
        self.surface.render(&self.rects);
    }

    /// 松开:结束当前矩形。列表本身不变,不需要重绘
    pub fn pointer_up(&mut self) {
        if let Some(rect) = self.current.take() {
            debug!("rect committed: {:?}", rect);
        }
        self.is_drawing = false;
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }
}
