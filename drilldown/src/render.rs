use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width};
use crate::types::{Border, Overflow, Rgb};

pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let clip = Rect::from_size(buf.width(), buf.height());
    render_element(element, layout, clip, buf);
}

fn render_element(element: &Element, layout: &LayoutResult, clip: Rect, buf: &mut Buffer) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    let visible = rect.intersect(&clip);

    if !visible.is_empty() {
        if let Some(bg) = &element.style.background {
            fill_rect(buf, visible, bg.to_rgb());
        }

        render_border(element, *rect, visible, buf);

        if let Content::Text(text) = &element.content {
            render_text(text, element, *rect, visible, buf);
        }
    }

    if let Content::Children(children) = &element.content {
        let child_clip = if element.overflow == Overflow::Hidden {
            visible
        } else {
            clip
        };
        if element.overflow == Overflow::Hidden && child_clip.is_empty() {
            return;
        }
        for child in children {
            render_element(child, layout, child_clip, buf);
        }
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    let x0 = rect.x.max(0) as u16;
    let y0 = rect.y.max(0) as u16;
    let x1 = rect.right().max(0).min(buf.width() as i32) as u16;
    let y1 = rect.bottom().max(0).min(buf.height() as i32) as u16;

    for y in y0..y1 {
        for x in x0..x1 {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = bg;
            }
        }
    }
}

fn render_text(text: &str, element: &Element, rect: Rect, visible: Rect, buf: &mut Buffer) {
    let fg = element
        .style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));

    let explicit_bg = element.style.background.as_ref().map(|c| c.to_rgb());

    let border_size = if element.style.border == Border::None {
        0
    } else {
        1
    };
    let inner = rect.shrink(element.padding + border_size);

    if inner.is_empty() {
        return;
    }

    let y = inner.y;
    if y < visible.top() || y >= visible.bottom() {
        return;
    }

    let line = crate::text::truncate_to_width(text, inner.width as usize);
    let mut x = inner.x + align_offset(display_width(&line), inner.width as usize, element.text_align) as i32;

    for ch in line.chars() {
        let w = char_width(ch).max(1) as i32;
        if x >= inner.right() {
            break;
        }
        if x >= visible.left() && x + w <= visible.right() && x >= 0 && y >= 0 {
            // Preserve existing background if no explicit background set
            let bg = explicit_bg.unwrap_or_else(|| {
                buf.get(x as u16, y as u16)
                    .map(|c| c.bg)
                    .unwrap_or(Rgb::new(0, 0, 0))
            });

            buf.set(
                x as u16,
                y as u16,
                Cell::new(ch)
                    .with_fg(fg)
                    .with_bg(bg)
                    .with_style(element.style.text_style),
            );

            if w == 2 {
                if let Some(cell) = buf.get_mut(x as u16 + 1, y as u16) {
                    cell.wide_continuation = true;
                }
            }
        }
        x += w;
    }
}

fn render_border(element: &Element, rect: Rect, visible: Rect, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match element.style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    let fg = element
        .style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    set_char(buf, visible, rect.x, rect.y, tl, fg);
    set_char(buf, visible, rect.right() - 1, rect.y, tr, fg);
    set_char(buf, visible, rect.x, rect.bottom() - 1, bl, fg);
    set_char(buf, visible, rect.right() - 1, rect.bottom() - 1, br, fg);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, visible, x, rect.y, h, fg);
        set_char(buf, visible, x, rect.bottom() - 1, h, fg);
    }

    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, visible, rect.x, y, v, fg);
        set_char(buf, visible, rect.right() - 1, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, visible: Rect, x: i32, y: i32, ch: char, fg: Rgb) {
    if !visible.contains(x, y) || x < 0 || y < 0 {
        return;
    }
    if let Some(cell) = buf.get_mut(x as u16, y as u16) {
        cell.char = ch;
        cell.fg = fg;
        // Preserve existing background
    }
}
