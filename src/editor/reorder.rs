//! 拖拽重排算法
//!
//! 两个编辑器共用的单元素移位：把被拖拽元素从原位置移除，
//! 再插入到目标元素之前。位于两个位置之间的元素各移动一格，
//! 其余元素不动。

/// 对顺序序列执行一次拖拽重排
///
/// # 参数
/// - `order`: 当前顺序序列
/// - `dragged`: 被拖拽的元素
/// - `target`: 放置目标元素（`dragged` 插入到它之前）
///
/// # 返回
/// 返回新的顺序序列；`dragged == target` 或任一元素不在序列中时返回 None（无变化）
pub fn shift_reorder<T>(order: &[T], dragged: T, target: T) -> Option<Vec<T>>
where
    T: PartialEq + Copy,
{
    if dragged == target {
        return None;
    }

    let from = order.iter().position(|&x| x == dragged)?;

    let mut next = order.to_vec();
    next.remove(from);

    let to = next.iter().position(|&x| x == target)?;
    next.insert(to, dragged);

    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_backward() {
        assert_eq!(shift_reorder(&[1, 2, 3, 4], 4, 1), Some(vec![4, 1, 2, 3]));
    }

    #[test]
    fn test_drag_forward() {
        assert_eq!(shift_reorder(&[1, 2, 3, 4], 1, 4), Some(vec![2, 3, 1, 4]));
    }

    #[test]
    fn test_same_element_is_noop() {
        assert_eq!(shift_reorder(&[1, 2, 3], 2, 2), None);
    }

    #[test]
    fn test_missing_element_is_noop() {
        assert_eq!(shift_reorder(&[1, 2, 3], 9, 1), None);
        assert_eq!(shift_reorder(&[1, 2, 3], 1, 9), None);
    }

    #[test]
    fn test_preserves_multiset() {
        let order = [5u32, 3, 8, 1, 9, 2];
        for &d in &order {
            for &t in &order {
                if d == t {
                    continue;
                }
                let next = shift_reorder(&order, d, t).unwrap();
                assert_eq!(next.len(), order.len());
                let mut a = next.clone();
                let mut b = order.to_vec();
                a.sort_unstable();
                b.sort_unstable();
                assert_eq!(a, b, "drag {} -> {} 丢失或新增了元素", d, t);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let a = shift_reorder(&[1, 2, 3, 4, 5], 2, 5);
        let b = shift_reorder(&[1, 2, 3, 4, 5], 2, 5);
        assert_eq!(a, b);
    }
}
